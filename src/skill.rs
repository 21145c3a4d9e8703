use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the primary document inside every skill package.
pub const PRIMARY_DOC: &str = "SKILL.md";

#[derive(thiserror::Error, Debug)]
pub enum SkillError {
    #[error("skill package not found: {0}")]
    PackageNotFound(String),
    #[error("SKILL.md not found in {0}")]
    DocumentNotFound(String),
}

impl SkillError {
    pub fn code(&self) -> &'static str {
        match self {
            SkillError::PackageNotFound(_) => "PACKAGE_NOT_FOUND",
            SkillError::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub header: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Scripts,
    References,
    Assets,
    Other,
}

impl ResourceKind {
    pub const RESERVED: [ResourceKind; 3] = [
        ResourceKind::Scripts,
        ResourceKind::References,
        ResourceKind::Assets,
    ];

    pub fn from_dir_name(name: &str) -> ResourceKind {
        match name {
            "scripts" => ResourceKind::Scripts,
            "references" => ResourceKind::References,
            "assets" => ResourceKind::Assets,
            _ => ResourceKind::Other,
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            ResourceKind::Scripts => "scripts",
            ResourceKind::References => "references",
            ResourceKind::Assets => "assets",
            ResourceKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceInventory {
    pub scripts: Vec<String>,
    pub references: Vec<String>,
    pub assets: Vec<String>,
    pub other: Vec<String>,
}

impl ResourceInventory {
    pub fn bucket(&self, kind: ResourceKind) -> &[String] {
        match kind {
            ResourceKind::Scripts => &self.scripts,
            ResourceKind::References => &self.references,
            ResourceKind::Assets => &self.assets,
            ResourceKind::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, kind: ResourceKind) -> &mut Vec<String> {
        match kind {
            ResourceKind::Scripts => &mut self.scripts,
            ResourceKind::References => &mut self.references,
            ResourceKind::Assets => &mut self.assets,
            ResourceKind::Other => &mut self.other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillPackage {
    pub path: PathBuf,
    pub document: Document,
    pub resources: ResourceInventory,
}

/// Split raw document text into a header map and a body.
///
/// The header is the block between the first two `---` delimiters. Text that
/// does not start with a delimiter, or that has fewer than three segments,
/// parses as an empty header with the whole input as body. Header lines
/// without a `:` are skipped.
pub fn parse_document(raw: &str) -> Document {
    if !raw.starts_with("---") {
        return Document {
            header: BTreeMap::new(),
            body: raw.to_string(),
        };
    }

    let parts: Vec<&str> = raw.splitn(3, "---").collect();
    if parts.len() < 3 {
        return Document {
            header: BTreeMap::new(),
            body: raw.to_string(),
        };
    }

    let mut header = BTreeMap::new();
    for line in parts[1].trim().lines() {
        if let Some((key, value)) = line.split_once(':') {
            header.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Document {
        header,
        body: parts[2].trim().to_string(),
    }
}

pub fn count_nonempty_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

pub fn load_package(path: &Path) -> anyhow::Result<SkillPackage> {
    if !path.is_dir() {
        return Err(SkillError::PackageNotFound(path.display().to_string()).into());
    }
    let doc_path = path.join(PRIMARY_DOC);
    if !doc_path.is_file() {
        return Err(SkillError::DocumentNotFound(path.display().to_string()).into());
    }

    let raw = fs::read_to_string(&doc_path)?;
    let document = parse_document(&raw);
    let resources = collect_resources(path)?;

    Ok(SkillPackage {
        path: path.to_path_buf(),
        document,
        resources,
    })
}

/// Shallow walk of the package top level. The three reserved subdirectories
/// contribute their entries as flat filename lists; everything else lands in
/// `other`, excluding the primary document and dot-prefixed entries.
pub fn collect_resources(path: &Path) -> anyhow::Result<ResourceInventory> {
    let mut inventory = ResourceInventory::default();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || name == PRIMARY_DOC {
            continue;
        }

        let kind = if entry.file_type()?.is_dir() {
            ResourceKind::from_dir_name(&name)
        } else {
            ResourceKind::Other
        };

        match kind {
            ResourceKind::Other => inventory.other.push(name),
            reserved => {
                for file in fs::read_dir(entry.path())? {
                    let file_name = file?.file_name().to_string_lossy().to_string();
                    if !file_name.starts_with('.') {
                        inventory.bucket_mut(reserved).push(file_name);
                    }
                }
            }
        }
    }

    inventory.scripts.sort();
    inventory.references.sort();
    inventory.assets.sort();
    inventory.other.sort();

    Ok(inventory)
}

use crate::domain::models::{
    BodyChanges, ChangeStatus, DiffReport, DiffSummary, FieldChange, FileChanges,
};
use crate::services::policy::DIFF_CONTEXT;
use crate::skill::{count_nonempty_lines, Document, ResourceKind, SkillPackage};
use similar::TextDiff;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;

pub fn diff_frontmatter(
    original: &Document,
    enhanced: &Document,
) -> BTreeMap<String, FieldChange> {
    let mut changes = BTreeMap::new();
    let keys: BTreeSet<&String> = original.header.keys().chain(enhanced.header.keys()).collect();

    for key in keys {
        let orig = original.header.get(key);
        let enh = enhanced.header.get(key);
        if orig == enh {
            continue;
        }
        let status = match (orig, enh) {
            (Some(_), Some(_)) => ChangeStatus::Modified,
            (None, Some(_)) => ChangeStatus::Added,
            _ => ChangeStatus::Removed,
        };
        changes.insert(
            key.clone(),
            FieldChange {
                original: orig.cloned(),
                enhanced: enh.cloned(),
                status,
            },
        );
    }

    changes
}

pub fn diff_body(original: &str, enhanced: &str) -> BodyChanges {
    let diff = TextDiff::from_lines(original, enhanced);
    let text = diff
        .unified_diff()
        .context_radius(DIFF_CONTEXT)
        .header("original", "enhanced")
        .to_string();

    // Single +/- markers are change lines; the doubled ones are the
    // `---`/`+++` file headers.
    let mut additions = 0;
    let mut deletions = 0;
    for line in text.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            additions += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            deletions += 1;
        }
    }

    BodyChanges {
        diff: if text.is_empty() { None } else { Some(text) },
        additions,
        deletions,
        original_lines: count_nonempty_lines(original),
        enhanced_lines: count_nonempty_lines(enhanced),
    }
}

/// Per reserved category: set-difference for added/removed, byte comparison
/// for common filenames. Unreadable files are treated as unmodified so a
/// half-readable package still diffs.
pub fn diff_files(original: &SkillPackage, enhanced: &SkillPackage) -> FileChanges {
    let mut changes = FileChanges::default();

    for kind in ResourceKind::RESERVED {
        let category = kind.dir_name();
        let orig: BTreeSet<&String> = original.resources.bucket(kind).iter().collect();
        let enh: BTreeSet<&String> = enhanced.resources.bucket(kind).iter().collect();

        let added: Vec<String> = enh.difference(&orig).map(|f| f.to_string()).collect();
        if !added.is_empty() {
            changes.added.insert(category.to_string(), added);
        }
        let removed: Vec<String> = orig.difference(&enh).map(|f| f.to_string()).collect();
        if !removed.is_empty() {
            changes.removed.insert(category.to_string(), removed);
        }

        let mut modified = Vec::new();
        for name in orig.intersection(&enh) {
            let before = fs::read(original.path.join(category).join(name.as_str()));
            let after = fs::read(enhanced.path.join(category).join(name.as_str()));
            if let (Ok(before), Ok(after)) = (before, after) {
                if before != after {
                    modified.push(name.to_string());
                }
            }
        }
        if !modified.is_empty() {
            changes.modified.insert(category.to_string(), modified);
        }
    }

    changes
}

pub fn compare_packages(original: &SkillPackage, enhanced: &SkillPackage) -> DiffReport {
    let frontmatter_changes = diff_frontmatter(&original.document, &enhanced.document);
    let body_changes = diff_body(&original.document.body, &enhanced.document.body);
    let file_changes = diff_files(original, enhanced);

    let files_added = file_changes.added.values().map(Vec::len).sum();
    let files_removed = file_changes.removed.values().map(Vec::len).sum();
    let files_modified = file_changes.modified.values().map(Vec::len).sum();
    let summary = DiffSummary {
        frontmatter_fields_changed: frontmatter_changes.len(),
        body_lines_added: body_changes.additions,
        body_lines_removed: body_changes.deletions,
        files_added,
        files_removed,
        files_modified,
        has_changes: !frontmatter_changes.is_empty()
            || body_changes.additions + body_changes.deletions > 0
            || files_added + files_removed + files_modified > 0,
    };

    DiffReport {
        original_path: original.path.display().to_string(),
        enhanced_path: enhanced.path.display().to_string(),
        frontmatter_changes,
        body_changes,
        file_changes,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{load_package, parse_document};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn frontmatter_diff_reports_status_per_key() {
        let original = parse_document("---\nname: demo\nlicense: MIT\n---\nbody");
        let enhanced = parse_document("---\nname: demo2\ndescription: new\n---\nbody");
        let changes = diff_frontmatter(&original, &enhanced);

        assert_eq!(changes["name"].status, ChangeStatus::Modified);
        assert_eq!(changes["license"].status, ChangeStatus::Removed);
        assert_eq!(changes["description"].status, ChangeStatus::Added);
        assert_eq!(changes["description"].original, None);
    }

    #[test]
    fn identical_documents_have_no_frontmatter_changes() {
        let doc = parse_document("---\nname: demo\n---\nbody");
        assert!(diff_frontmatter(&doc, &doc).is_empty());
    }

    #[test]
    fn body_self_diff_is_empty() {
        let body = "line one\n\nline two\nline three";
        let changes = diff_body(body, body);
        assert_eq!(changes.additions, 0);
        assert_eq!(changes.deletions, 0);
        assert!(changes.diff.is_none());
    }

    #[test]
    fn body_diff_counts_exclude_file_headers() {
        let changes = diff_body("a\nb\nc\n", "a\nx\nc\nd\n");
        assert_eq!(changes.additions, 2);
        assert_eq!(changes.deletions, 1);
        let text = changes.diff.expect("diff text");
        assert!(text.starts_with("--- original\n+++ enhanced\n"));
    }

    #[test]
    fn body_diff_tracks_nonempty_line_counts() {
        let changes = diff_body("a\n\nb\n", "a\n");
        assert_eq!(changes.original_lines, 2);
        assert_eq!(changes.enhanced_lines, 1);
    }

    fn write_skill(dir: &Path, body: &str) {
        fs::write(
            dir.join("SKILL.md"),
            format!("---\nname: demo\n---\n{body}"),
        )
        .expect("write SKILL.md");
    }

    #[test]
    fn file_diff_classifies_added_removed_modified() {
        let tmp = TempDir::new().expect("tempdir");
        let orig_dir = tmp.path().join("orig");
        let enh_dir = tmp.path().join("enh");
        fs::create_dir_all(orig_dir.join("scripts")).expect("mkdir");
        fs::create_dir_all(enh_dir.join("scripts")).expect("mkdir");
        write_skill(&orig_dir, "# Demo\n");
        write_skill(&enh_dir, "# Demo\n");

        fs::write(orig_dir.join("scripts/gone.py"), "old").expect("write");
        fs::write(orig_dir.join("scripts/changed.py"), "v1").expect("write");
        fs::write(enh_dir.join("scripts/changed.py"), "v2").expect("write");
        fs::write(enh_dir.join("scripts/new.py"), "fresh").expect("write");

        let original = load_package(&orig_dir).expect("load original");
        let enhanced = load_package(&enh_dir).expect("load enhanced");
        let changes = diff_files(&original, &enhanced);

        assert_eq!(changes.added["scripts"], vec!["new.py".to_string()]);
        assert_eq!(changes.removed["scripts"], vec!["gone.py".to_string()]);
        assert_eq!(changes.modified["scripts"], vec!["changed.py".to_string()]);
    }

    #[test]
    fn identical_packages_compare_without_changes() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = tmp.path().join("skill");
        fs::create_dir_all(dir.join("references")).expect("mkdir");
        write_skill(&dir, "# Demo\n\n## Usage\ntext\n");
        fs::write(dir.join("references/guide.md"), "guide").expect("write");

        let pkg = load_package(&dir).expect("load package");
        let report = compare_packages(&pkg, &pkg);

        assert!(!report.summary.has_changes);
        assert!(report.frontmatter_changes.is_empty());
        assert!(report.file_changes.is_empty());
        assert_eq!(report.summary.body_lines_added, 0);
        assert_eq!(report.summary.body_lines_removed, 0);
    }
}

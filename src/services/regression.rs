use crate::services::policy::MAX_CONTENT_REDUCTION;
use crate::skill::{count_nonempty_lines, ResourceKind, SkillPackage};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn h2_title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^##\s+(.+)$").expect("static pattern"))
}

fn h2_titles(body: &str) -> BTreeSet<String> {
    h2_title_pattern()
        .captures_iter(body)
        .map(|c| c[1].to_string())
        .collect()
}

/// Content-loss checks between a current package and the original it was
/// derived from. Findings are plain messages; the caller decides whether
/// they are errors or warnings.
pub fn check_regressions(current: &SkillPackage, original: &SkillPackage) -> Vec<String> {
    let mut findings = Vec::new();

    let current_name = current.document.header.get("name");
    let original_name = original.document.header.get("name");
    if current_name != original_name {
        findings.push(format!(
            "Skill name changed: '{}' -> '{}'",
            original_name.map(String::as_str).unwrap_or(""),
            current_name.map(String::as_str).unwrap_or(""),
        ));
    }

    let original_lines = count_nonempty_lines(&original.document.body);
    let current_lines = count_nonempty_lines(&current.document.body);
    if original_lines > 0 {
        let reduction = (original_lines as f64 - current_lines as f64) / original_lines as f64;
        if reduction > MAX_CONTENT_REDUCTION {
            findings.push(format!(
                "Significant content reduction: {} -> {} lines ({:.1}% reduction)",
                original_lines,
                current_lines,
                reduction * 100.0
            ));
        }
    }

    let removed_sections: Vec<String> = h2_titles(&original.document.body)
        .difference(&h2_titles(&current.document.body))
        .cloned()
        .collect();
    if !removed_sections.is_empty() {
        findings.push(format!("Sections removed: {}", removed_sections.join(", ")));
    }

    for kind in ResourceKind::RESERVED {
        let original_files: BTreeSet<&String> = original.resources.bucket(kind).iter().collect();
        let current_files: BTreeSet<&String> = current.resources.bucket(kind).iter().collect();
        let removed: Vec<String> = original_files
            .difference(&current_files)
            .map(|f| f.to_string())
            .collect();
        if !removed.is_empty() {
            findings.push(format!(
                "Files removed from {}/: {}",
                kind.dir_name(),
                removed.join(", ")
            ));
        }
    }

    findings
}

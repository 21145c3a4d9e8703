use crate::domain::models::ValidationReport;
use crate::services::analysis::{count_headings, strip_code_blocks};
use crate::services::policy::{
    MAX_BODY_LINES, MIN_BODY_LINES_VALIDATE, MIN_DESCRIPTION_CHARS, VALID_HEADER_FIELDS,
};
use crate::services::regression::check_regressions;
use crate::skill::{count_nonempty_lines, ResourceKind, SkillPackage};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn todo_item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\[TODO[^\]]*\]").expect("static pattern"))
}

fn resource_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:scripts|references|assets)/[\w.-]+").expect("static pattern")
    })
}

pub fn validate_frontmatter(header: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();

    match header.get("name") {
        None => errors.push("Missing required field: 'name'".to_string()),
        Some(name) if name.is_empty() => errors.push("Field 'name' is empty".to_string()),
        Some(_) => {}
    }

    match header.get("description") {
        None => errors.push("Missing required field: 'description'".to_string()),
        Some(description) if description.is_empty() => {
            errors.push("Field 'description' is empty".to_string());
        }
        Some(description) if description.len() < MIN_DESCRIPTION_CHARS => {
            errors.push(format!(
                "Description too short (minimum {MIN_DESCRIPTION_CHARS} characters)"
            ));
        }
        Some(_) => {}
    }

    for field in header.keys() {
        if !VALID_HEADER_FIELDS.contains(&field.as_str()) {
            errors.push(format!("Unknown frontmatter field: '{field}'"));
        }
    }

    errors
}

pub fn validate_structure(body: &str) -> Vec<String> {
    let mut errors = Vec::new();

    let line_count = count_nonempty_lines(body);
    if line_count < MIN_BODY_LINES_VALIDATE {
        errors.push(format!(
            "Body too short (minimum {MIN_BODY_LINES_VALIDATE} non-empty lines)"
        ));
    }
    if line_count > MAX_BODY_LINES {
        errors.push(format!(
            "Body too long ({line_count} lines, maximum {MAX_BODY_LINES})"
        ));
    }

    let body_no_code = strip_code_blocks(body);
    let (h1_count, _) = count_headings(&body_no_code);
    if h1_count == 0 {
        errors.push("Missing main heading (H1)".to_string());
    } else if h1_count > 1 {
        errors.push(format!("Multiple H1 headings found ({h1_count})"));
    }

    if body.matches("```").count() % 2 != 0 {
        errors.push("Unclosed code block detected".to_string());
    }

    let todos = todo_item_pattern().find_iter(&body_no_code).count();
    if todos > 0 {
        errors.push(format!("{todos} TODO items still present"));
    }

    errors
}

/// Cross-check body references against files on disk: referenced paths must
/// exist, and shipped resources should be mentioned somewhere in the body.
pub fn validate_resource_refs(pkg: &SkillPackage) -> Vec<String> {
    let mut findings = Vec::new();
    let body = &pkg.document.body;
    let body_no_code = strip_code_blocks(body);

    for reference in resource_ref_pattern().find_iter(&body_no_code) {
        if !pkg.path.join(reference.as_str()).exists() {
            findings.push(format!("Referenced file not found: {}", reference.as_str()));
        }
    }

    for kind in ResourceKind::RESERVED {
        for file in pkg.resources.bucket(kind) {
            let rel_path = format!("{}/{}", kind.dir_name(), file);
            if !body.contains(&rel_path) && !body.contains(file.as_str()) {
                findings.push(format!("Potentially orphaned resource: {rel_path}"));
            }
        }
    }

    findings
}

pub fn validate_package(
    pkg: &SkillPackage,
    original: Option<&SkillPackage>,
    strict: bool,
) -> ValidationReport {
    let mut errors = validate_frontmatter(&pkg.document.header);
    errors.extend(validate_structure(&pkg.document.body));

    let mut warnings = Vec::new();
    let resource_findings = validate_resource_refs(pkg);
    if strict {
        errors.extend(resource_findings);
    } else {
        warnings.extend(resource_findings);
    }

    if let Some(original) = original {
        let regression_findings = check_regressions(pkg, original);
        if strict {
            errors.extend(regression_findings);
        } else {
            warnings.extend(regression_findings);
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        path: pkg.path.display().to_string(),
        name: pkg
            .document
            .header
            .get("name")
            .cloned()
            .unwrap_or_else(|| "unknown".to_string()),
        errors,
        warnings,
    }
}

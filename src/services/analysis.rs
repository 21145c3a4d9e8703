use crate::domain::models::{AnalysisReport, DescriptionReport, StructureReport};
use crate::services::policy::*;
use crate::services::resources::analyze_resources;
use crate::skill::{count_nonempty_lines, SkillPackage};
use regex::Regex;
use std::sync::OnceLock;

struct CachedPatterns {
    code_fence: Regex,
    action_verb: Regex,
    todo_marker: Regex,
}

fn cached_patterns() -> &'static CachedPatterns {
    static PATTERNS: OnceLock<CachedPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CachedPatterns {
        code_fence: Regex::new(r"(?s)```.*?```").expect("static pattern"),
        action_verb: Regex::new(&format!(r"\b(?:{})\b", ACTION_VERBS.join("|")))
            .expect("static pattern"),
        todo_marker: Regex::new(r"(?i)\[TODO").expect("static pattern"),
    })
}

/// Remove fenced code regions so example content never trips the prose
/// heuristics.
pub fn strip_code_blocks(content: &str) -> String {
    cached_patterns()
        .code_fence
        .replace_all(content, "")
        .into_owned()
}

/// H1/H2 counts over code-stripped body text.
pub fn count_headings(body_no_code: &str) -> (usize, usize) {
    let mut h1 = 0;
    let mut h2 = 0;
    for line in body_no_code.lines() {
        if line.starts_with("# ") && !line.starts_with("## ") {
            h1 += 1;
        } else if line.starts_with("## ") && !line.starts_with("### ") {
            h2 += 1;
        }
    }
    (h1, h2)
}

pub fn count_todo_markers(body_no_code: &str) -> usize {
    cached_patterns().todo_marker.find_iter(body_no_code).count()
}

pub fn analyze_description(description: &str) -> DescriptionReport {
    if description.is_empty() {
        return DescriptionReport {
            score: 0,
            word_count: 0,
            has_trigger_guidance: false,
            issues: vec!["Missing description".to_string()],
            suggestions: vec!["Add description to frontmatter".to_string()],
        };
    }

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100;

    let word_count = description.split_whitespace().count();
    if word_count < MIN_DESCRIPTION_WORDS {
        issues.push("Description too short".to_string());
        suggestions
            .push("Expand description to cover what the skill does and when to use it".to_string());
        score -= SHORT_DESCRIPTION_PENALTY;
    }
    if word_count > MAX_DESCRIPTION_WORDS {
        issues.push("Description may be too long".to_string());
        suggestions.push("Consider condensing to essential triggers only".to_string());
        score -= LONG_DESCRIPTION_PENALTY;
    }

    let lowered = description.to_lowercase();
    let has_trigger = TRIGGER_PHRASES.iter().any(|p| lowered.contains(p));
    if !has_trigger {
        issues.push("Missing trigger guidance".to_string());
        suggestions.push("Add \"Use when...\" or similar trigger phrasing".to_string());
        score -= MISSING_TRIGGER_PENALTY;
    }

    if !cached_patterns().action_verb.is_match(&lowered) {
        issues.push("Missing action verbs".to_string());
        suggestions.push("Include verbs describing what the skill does".to_string());
        score -= MISSING_VERB_PENALTY;
    }

    DescriptionReport {
        score: score.max(0),
        word_count,
        has_trigger_guidance: has_trigger,
        issues,
        suggestions,
    }
}

pub fn analyze_structure(body: &str) -> StructureReport {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100;

    let line_count = count_nonempty_lines(body);
    let body_no_code = strip_code_blocks(body);
    let (h1_count, h2_count) = count_headings(&body_no_code);

    if h1_count == 0 {
        issues.push("Missing main heading (H1)".to_string());
        score -= MISSING_H1_PENALTY;
    }
    if h1_count > 1 {
        issues.push(format!("Multiple H1 headings ({h1_count})"));
        suggestions.push("Use a single H1 for the skill title and H2 for sections".to_string());
        score -= EXTRA_H1_PENALTY;
    }
    if h2_count < MIN_SECTION_COUNT {
        issues.push("Few section headings".to_string());
        suggestions.push("Add H2 sections to organize content".to_string());
        score -= FEW_SECTIONS_PENALTY;
    }

    if line_count > MAX_BODY_LINES {
        issues.push(format!("Body too long ({line_count} lines)"));
        suggestions.push("Move detailed content to references/".to_string());
        score -= LONG_BODY_PENALTY;
    }
    if line_count < MIN_BODY_LINES_ANALYZE {
        issues.push("Body very short".to_string());
        suggestions.push("Add more guidance and examples".to_string());
        score -= SHORT_BODY_PENALTY;
    }

    let code_blocks = body.matches("```").count() / 2;
    if code_blocks == 0 && line_count > CODE_EXAMPLE_HINT_LINES {
        suggestions.push("Consider adding code examples".to_string());
    }

    let todos = count_todo_markers(&body_no_code);
    if todos > 0 {
        issues.push(format!("{todos} TODO items remaining"));
        score -= TODO_PENALTY * todos as i32;
    }

    StructureReport {
        score: score.max(0),
        line_count,
        h1_count,
        h2_count,
        code_blocks,
        todos,
        issues,
        suggestions,
    }
}

pub fn analyze_package(pkg: &SkillPackage) -> AnalysisReport {
    let description = analyze_description(
        pkg.document
            .header
            .get("description")
            .map(String::as_str)
            .unwrap_or(""),
    );
    let structure = analyze_structure(&pkg.document.body);
    let resources = analyze_resources(&pkg.resources);

    let resource_health = if resources.issues.is_empty() {
        RESOURCE_HEALTH_OK
    } else {
        RESOURCE_HEALTH_FLAGGED
    };
    let overall_score = (description.score as f64 * DESCRIPTION_WEIGHT
        + structure.score as f64 * STRUCTURE_WEIGHT
        + resource_health as f64 * RESOURCE_WEIGHT)
        .round() as i32;

    let all_issues = description
        .issues
        .iter()
        .chain(structure.issues.iter())
        .chain(resources.issues.iter())
        .cloned()
        .collect();
    let all_suggestions = description
        .suggestions
        .iter()
        .chain(structure.suggestions.iter())
        .chain(resources.suggestions.iter())
        .cloned()
        .collect();

    AnalysisReport {
        path: pkg.path.display().to_string(),
        name: pkg
            .document
            .header
            .get("name")
            .cloned()
            .unwrap_or_default(),
        overall_score,
        description,
        structure,
        resources,
        all_issues,
        all_suggestions,
    }
}

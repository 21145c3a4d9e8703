//! Scoring and validation policy tables.
//!
//! Heuristic tunables live here so the scoring policy can change without
//! touching parsing or report plumbing.

pub const TRIGGER_PHRASES: [&str; 5] = [
    "use when",
    "use for",
    "triggers on",
    "use this",
    "should be used",
];

pub const ACTION_VERBS: [&str; 9] = [
    "create", "edit", "manage", "process", "handle", "generate", "analyze", "convert", "build",
];

pub const VALID_HEADER_FIELDS: [&str; 3] = ["name", "description", "license"];

pub const DESCRIPTION_WEIGHT: f64 = 0.3;
pub const STRUCTURE_WEIGHT: f64 = 0.5;
pub const RESOURCE_WEIGHT: f64 = 0.2;
pub const RESOURCE_HEALTH_OK: i32 = 100;
pub const RESOURCE_HEALTH_FLAGGED: i32 = 80;

pub const MIN_DESCRIPTION_WORDS: usize = 10;
pub const MAX_DESCRIPTION_WORDS: usize = 100;
pub const MIN_DESCRIPTION_CHARS: usize = 20;
pub const SHORT_DESCRIPTION_PENALTY: i32 = 30;
pub const LONG_DESCRIPTION_PENALTY: i32 = 10;
pub const MISSING_TRIGGER_PENALTY: i32 = 20;
pub const MISSING_VERB_PENALTY: i32 = 10;

pub const MAX_BODY_LINES: usize = 500;
pub const MIN_BODY_LINES_ANALYZE: usize = 20;
pub const MIN_BODY_LINES_VALIDATE: usize = 10;
pub const LONG_BODY_PENALTY: i32 = 20;
pub const SHORT_BODY_PENALTY: i32 = 15;
pub const MISSING_H1_PENALTY: i32 = 15;
pub const EXTRA_H1_PENALTY: i32 = 10;
pub const FEW_SECTIONS_PENALTY: i32 = 10;
pub const MIN_SECTION_COUNT: usize = 2;
pub const TODO_PENALTY: i32 = 5;
pub const CODE_EXAMPLE_HINT_LINES: usize = 50;

pub const MAX_CONTENT_REDUCTION: f64 = 0.3;

pub const DIFF_CONTEXT: usize = 3;
pub const DIFF_PREVIEW_LINES: usize = 50;
pub const FIELD_PREVIEW_CHARS: usize = 80;

pub const PASSING_SCORE: i32 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_weights_sum_to_one() {
        assert!((DESCRIPTION_WEIGHT + STRUCTURE_WEIGHT + RESOURCE_WEIGHT - 1.0).abs() < 1e-9);
    }
}

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionReport {
    pub score: i32,
    pub word_count: usize,
    pub has_trigger_guidance: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StructureReport {
    pub score: i32,
    pub line_count: usize,
    pub h1_count: usize,
    pub h2_count: usize,
    pub code_blocks: usize,
    pub todos: usize,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourceReport {
    pub scripts_count: usize,
    pub references_count: usize,
    pub assets_count: usize,
    pub other_count: usize,
    pub total: usize,
    pub scripts: Vec<String>,
    pub references: Vec<String>,
    pub assets: Vec<String>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub path: String,
    pub name: String,
    pub overall_score: i32,
    pub description: DescriptionReport,
    pub structure: StructureReport,
    pub resources: ResourceReport,
    pub all_issues: Vec<String>,
    pub all_suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Serialize)]
pub struct FieldChange {
    pub original: Option<String>,
    pub enhanced: Option<String>,
    pub status: ChangeStatus,
}

#[derive(Debug, Serialize)]
pub struct BodyChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    pub additions: usize,
    pub deletions: usize,
    pub original_lines: usize,
    pub enhanced_lines: usize,
}

#[derive(Debug, Serialize, Default)]
pub struct FileChanges {
    pub added: BTreeMap<String, Vec<String>>,
    pub removed: BTreeMap<String, Vec<String>>,
    pub modified: BTreeMap<String, Vec<String>>,
}

impl FileChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct DiffSummary {
    pub frontmatter_fields_changed: usize,
    pub body_lines_added: usize,
    pub body_lines_removed: usize,
    pub files_added: usize,
    pub files_removed: usize,
    pub files_modified: usize,
    pub has_changes: bool,
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub original_path: String,
    pub enhanced_path: String,
    pub frontmatter_changes: BTreeMap<String, FieldChange>,
    pub body_changes: BodyChanges,
    pub file_changes: FileChanges,
    pub summary: DiffSummary,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub path: String,
    pub name: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

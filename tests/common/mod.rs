use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GOOD_DESCRIPTION: &str = "Analyze and convert skill packages into validated bundles. \
                                    Use when auditing skill quality before a release.";

pub const SAMPLE_BODY: &str = "# Sample Skill

## Overview
This skill audits a package layout end to end.
It scores the description and the body structure.
It also inventories helper resources by category.
Scores blend into a single overall number.
Use the JSON flag for machine readable output.

## Usage
Run scripts/run.py to refresh the bundle.
See references/guide.md for the full walkthrough.
Each run is read only and safe to repeat.
Reports list issues next to suggestions.
Suggestions are safe to apply in any order.

## Notes
Keep section headings stable across versions.
Avoid removing resource files between releases.
Stick to the reserved directories for helpers.
Keep the body under five hundred lines.
Wrap examples in code fences when needed.
Prefer short actionable suggestions.
Review the report before shipping changes.
";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("skillcheck").expect("binary under test")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_code(&self, args: &[&str], code: i32) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Full well-formed fixture: frontmatter, structured body, one script,
    /// one reference, both mentioned in the body.
    pub fn make_skill(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(dir.join("scripts")).expect("create scripts dir");
        fs::create_dir_all(dir.join("references")).expect("create references dir");
        fs::write(dir.join("scripts/run.py"), "print('refresh')\n").expect("write script");
        fs::write(dir.join("references/guide.md"), "# Guide\n").expect("write reference");
        write_skill_md(&dir, name, GOOD_DESCRIPTION, SAMPLE_BODY);
        dir
    }
}

pub fn write_skill_md(dir: &Path, name: &str, description: &str, body: &str) {
    fs::create_dir_all(dir).expect("create skill dir");
    fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {name}\ndescription: {description}\n---\n\n{body}"),
    )
    .expect("write SKILL.md");
}

use crate::*;
use std::path::Path;

pub fn handle_validate(
    cli: &Cli,
    path: &Path,
    original: Option<&Path>,
    strict: bool,
) -> anyhow::Result<i32> {
    let pkg = load_package(path)?;
    let original_pkg = match original {
        Some(original_path) => Some(load_package(original_path)?),
        None => None,
    };

    let report = validate_package(&pkg, original_pkg.as_ref(), strict);

    if cli.json {
        print_json(&report)?;
    } else {
        println!("skill: {}", report.name);
        println!("path: {}", report.path);
        println!(
            "status: {}",
            if report.valid { "valid" } else { "invalid" }
        );
        for error in &report.errors {
            println!("error\t{error}");
        }
        for warning in &report.warnings {
            println!("warning\t{warning}");
        }
    }

    Ok(if report.valid { 0 } else { 1 })
}

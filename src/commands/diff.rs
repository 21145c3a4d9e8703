use crate::*;
use std::path::Path;

pub fn handle_diff(
    cli: &Cli,
    original: &Path,
    enhanced: &Path,
    summary_only: bool,
) -> anyhow::Result<i32> {
    let original_pkg = load_package(original)?;
    let enhanced_pkg = load_package(enhanced)?;
    let mut report = compare_packages(&original_pkg, &enhanced_pkg);

    if cli.json {
        // The raw diff text is noisy in JSON; the counts carry the signal.
        report.body_changes.diff = None;
        print_json(&report)?;
    } else if summary_only {
        print_summary(&report);
    } else {
        print_full_report(&report);
    }

    Ok(0)
}

fn print_summary(report: &DiffReport) {
    println!("original: {}", report.original_path);
    println!("enhanced: {}", report.enhanced_path);
    if !report.summary.has_changes {
        println!("no changes detected");
        return;
    }
    println!(
        "frontmatter fields changed: {}",
        report.summary.frontmatter_fields_changed
    );
    println!("body lines added: {}", report.summary.body_lines_added);
    println!("body lines removed: {}", report.summary.body_lines_removed);
    println!("files added: {}", report.summary.files_added);
    println!("files removed: {}", report.summary.files_removed);
    println!("files modified: {}", report.summary.files_modified);
}

fn print_full_report(report: &DiffReport) {
    println!("original: {}", report.original_path);
    println!("enhanced: {}", report.enhanced_path);

    for (field, change) in &report.frontmatter_changes {
        println!("frontmatter\t{}\t{:?}", field, change.status);
        if let Some(value) = &change.original {
            println!("  - {}", preview(value, FIELD_PREVIEW_CHARS));
        }
        if let Some(value) = &change.enhanced {
            println!("  + {}", preview(value, FIELD_PREVIEW_CHARS));
        }
    }

    println!(
        "body: {} -> {} lines (+{} -{})",
        report.body_changes.original_lines,
        report.body_changes.enhanced_lines,
        report.body_changes.additions,
        report.body_changes.deletions
    );
    if let Some(diff) = &report.body_changes.diff {
        for line in diff.lines().take(DIFF_PREVIEW_LINES) {
            println!("  {line}");
        }
    }

    for (category, files) in &report.file_changes.added {
        for file in files {
            println!("file added\t{category}/{file}");
        }
    }
    for (category, files) in &report.file_changes.removed {
        for file in files {
            println!("file removed\t{category}/{file}");
        }
    }
    for (category, files) in &report.file_changes.modified {
        for file in files {
            println!("file modified\t{category}/{file}");
        }
    }

    if !report.summary.has_changes {
        println!("no changes detected");
    }
}

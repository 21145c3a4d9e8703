use crate::*;
use std::path::Path;

pub fn handle_analyze(cli: &Cli, path: &Path, verbose: bool) -> anyhow::Result<i32> {
    let pkg = load_package(path)?;
    let report = analyze_package(&pkg);

    if cli.json {
        print_json(&report)?;
    } else {
        print_report(&report, verbose);
    }

    Ok(if report.overall_score >= PASSING_SCORE {
        0
    } else {
        2
    })
}

fn print_report(report: &AnalysisReport, verbose: bool) {
    println!("skill: {}", report.name);
    println!("path: {}", report.path);
    println!("overall: {}/100", report.overall_score);
    println!(
        "description: {}/100 ({} words, trigger guidance: {})",
        report.description.score,
        report.description.word_count,
        if report.description.has_trigger_guidance {
            "yes"
        } else {
            "no"
        }
    );
    println!(
        "structure: {}/100 ({} lines, {} sections, {} code blocks)",
        report.structure.score,
        report.structure.line_count,
        report.structure.h2_count,
        report.structure.code_blocks
    );
    if report.structure.todos > 0 {
        println!("todos: {}", report.structure.todos);
    }
    println!(
        "resources: {} scripts, {} references, {} assets, {} other",
        report.resources.scripts_count,
        report.resources.references_count,
        report.resources.assets_count,
        report.resources.other_count
    );
    if verbose {
        for file in &report.resources.scripts {
            println!("  scripts/{file}");
        }
        for file in &report.resources.references {
            println!("  references/{file}");
        }
        for file in &report.resources.assets {
            println!("  assets/{file}");
        }
    }

    for issue in &report.all_issues {
        println!("issue\t{issue}");
    }
    for suggestion in &report.all_suggestions {
        println!("suggestion\t{suggestion}");
    }
}

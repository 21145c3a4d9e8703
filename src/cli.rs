use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skillcheck", version, about = "Skill package analysis CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Analyze {
        path: PathBuf,
        #[arg(long, help = "List resource filenames in the report")]
        verbose: bool,
    },
    Diff {
        original: PathBuf,
        enhanced: PathBuf,
        #[arg(long, help = "Print change counts only")]
        summary: bool,
    },
    Validate {
        path: PathBuf,
        #[arg(long, help = "Original package to check for regressions against")]
        original: Option<PathBuf>,
        #[arg(long, help = "Treat resource and regression findings as errors")]
        strict: bool,
    },
}

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;
mod skill;

pub use cli::*;
pub use domain::models::*;
pub use services::analysis::*;
pub use services::diff::*;
pub use services::output::*;
pub use services::policy::*;
pub use services::regression::*;
pub use services::resources::*;
pub use services::validation::*;
pub use skill::*;

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let code = err
                .downcast_ref::<SkillError>()
                .map(SkillError::code)
                .unwrap_or("ERROR");
            print_error(cli.json, code, &format!("{err:#}"));
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Analyze { path, verbose } => commands::handle_analyze(cli, path, *verbose),
        Commands::Diff {
            original,
            enhanced,
            summary,
        } => commands::handle_diff(cli, original, enhanced, *summary),
        Commands::Validate {
            path,
            original,
            strict,
        } => commands::handle_validate(cli, path, original.as_deref(), *strict),
    }
}

use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::{checks, output};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            let report = checks::run_all(&cli.root);
            output::print_report(cli.json, &report)?;
            if report.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Checks => {
            output::print_sections(cli.json, &checks::registry())?;
        }
    }

    Ok(())
}

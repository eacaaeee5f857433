//! Bibtidy CLI - non-destructive BibTeX field normalizer.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dates {
            file,
            output,
            report,
        } => commands::dates::run(file, output, report, cli.verbose),

        Commands::Titles {
            file,
            output,
            report,
        } => commands::titles::run(file, output, report, cli.verbose),

        Commands::Clean {
            file,
            output,
            report,
        } => commands::clean::run(file, output, report, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

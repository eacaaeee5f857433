//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bibtidy: non-destructive BibTeX field normalizer
#[derive(Parser)]
#[command(name = "bibtidy")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite date/month fields of articles and proceedings into year fields
    Dates {
        /// Path to the BibTeX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_tidy.bib)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the change ledger as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Re-capitalize title fields of non-book entries
    Titles {
        /// Path to the BibTeX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_tidy.bib)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the change ledger as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Run every normalization pass
    Clean {
        /// Path to the BibTeX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_tidy.bib)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the change ledger as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

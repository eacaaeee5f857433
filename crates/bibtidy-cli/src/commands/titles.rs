//! Titles command - re-capitalize title fields.

use std::path::PathBuf;

use bibtidy::NormalizerConfig;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    super::execute(file, output, report, verbose, NormalizerConfig::titles_only())
}

//! Dates command - rewrite date/month fields into canonical year fields.

use std::path::PathBuf;

use bibtidy::NormalizerConfig;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    super::execute(file, output, report, verbose, NormalizerConfig::dates_only())
}

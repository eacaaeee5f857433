//! Main Cleaner struct and public API.

use std::path::Path;

use crate::error::Result;
use crate::input::{BibDatabase, Parser, SourceMetadata};
use crate::normalize::{NormalizeResult, Normalizer, NormalizerConfig};
use crate::output::Formatter;

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Default)]
pub struct CleanerConfig {
    /// Which normalization passes run.
    pub normalizer: NormalizerConfig,
}

/// Result of cleaning a BibTeX file.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The normalized database.
    pub database: BibDatabase,
    /// Change ledger for the run.
    pub report: NormalizeResult,
    /// The rendered, normalized BibTeX text.
    pub output: String,
}

/// The cleaning pipeline: parse, normalize, render.
pub struct Cleaner {
    parser: Parser,
    normalizer: Normalizer,
    formatter: Formatter,
}

impl Cleaner {
    /// Create a cleaner with default configuration (all passes on).
    pub fn new() -> Self {
        Self::with_config(CleanerConfig::default())
    }

    /// Create a cleaner with custom configuration.
    pub fn with_config(config: CleanerConfig) -> Self {
        Self {
            parser: Parser::new(),
            normalizer: Normalizer::with_config(config.normalizer),
            formatter: Formatter::new(),
        }
    }

    /// Clean a BibTeX file: load it, normalize every record, and render the
    /// result. Nothing is written to disk; the caller decides where the
    /// output text goes.
    pub fn clean(&self, path: impl AsRef<Path>) -> Result<CleanResult> {
        let (mut database, source) = self.parser.parse_file(path)?;
        let report = self.normalizer.normalize(&mut database);
        let output = self.formatter.render_all(&database);

        Ok(CleanResult {
            source,
            database,
            report,
            output,
        })
    }

    /// Clean BibTeX text directly.
    pub fn clean_str(&self, input: &str) -> Result<(BibDatabase, NormalizeResult)> {
        let mut database = self.parser.parse_str(input)?;
        let report = self.normalizer.normalize(&mut database);
        Ok((database, report))
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_clean_file() {
        let content = "@article{a1,\n  title = {A Messy Title},\n  date = {2021-05}\n}\n";
        let file = create_test_file(content);

        let result = Cleaner::new().clean(file.path()).unwrap();

        assert_eq!(result.source.record_count, 1);
        assert_eq!(result.report.years_extracted, 1);
        assert!(result.output.contains("year = {2021}"));
        assert!(result.output.contains("__comment1 = \"Original date = {2021-05}\""));
        assert!(!result.output.contains("date = {2021-05}\n"));
    }

    #[test]
    fn test_clean_str_round_trips_unchanged_input() {
        let cleaner = Cleaner::new();
        let (db, report) = cleaner
            .clean_str("@book{b1,\n  title = {Kept As IS}\n}\n")
            .unwrap();

        assert_eq!(db.len(), 1);
        assert!(report.is_clean());
        assert_eq!(db.records[0].field("title").unwrap().raw, "Kept As IS");
    }

    #[test]
    fn test_parse_error_propagates() {
        let file = create_test_file("@article{broken,\n  title = {open\n");
        assert!(Cleaner::new().clean(file.path()).is_err());
    }
}

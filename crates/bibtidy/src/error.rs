//! Error types for the bibtidy library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bibtidy operations.
///
/// An unparsable `date` field is deliberately not represented here: it is an
/// expected outcome of year extraction, handled by annotating the record and
/// reported through the normalization ledger.
#[derive(Debug, Error)]
pub enum BibtidyError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing BibTeX input.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bibtidy operations.
pub type Result<T> = std::result::Result<T, BibtidyError>;

//! Bibtidy: non-destructive BibTeX field normalizer.
//!
//! Bibtidy rewrites inconsistent `date`, `month`, and `title` fields of a
//! BibTeX database into a canonical form while keeping every original value
//! recoverable from the record itself.
//!
//! # Core Principles
//!
//! - **Non-destructive**: a value removed from its canonical slot is kept as
//!   a numbered `__comment<N>` annotation field on the same record
//! - **Tolerant**: date parsing falls back through progressively looser
//!   patterns, and an unparsable date is flagged, never dropped
//! - **Faithful output**: field insertion order and braced/quoted rendering
//!   styles survive the round trip
//!
//! # Example
//!
//! ```no_run
//! use bibtidy::Cleaner;
//!
//! let cleaner = Cleaner::new();
//! let result = cleaner.clean("references.bib").unwrap();
//!
//! println!("Records: {}", result.source.record_count);
//! println!("Years extracted: {}", result.report.years_extracted);
//! std::fs::write("references_tidy.bib", &result.output).unwrap();
//! ```

pub mod error;
pub mod input;
pub mod normalize;
pub mod output;

mod cleaner;

pub use crate::cleaner::{CleanResult, Cleaner, CleanerConfig};
pub use error::{BibtidyError, Result};
pub use input::{
    ANNOTATION_PREFIX, BibDatabase, EntryKind, FieldStyle, FieldValue, Parser, Record,
    SourceMetadata,
};
pub use normalize::{
    FieldChange, NormalizeResult, Normalizer, NormalizerConfig, RecordChange, capitalize,
    extract_year,
};
pub use output::Formatter;

//! Input parsing and record model.

mod parser;
mod source;

pub use parser::Parser;
pub use source::{
    ANNOTATION_PREFIX, BibDatabase, EntryKind, FieldStyle, FieldValue, Record, SourceMetadata,
};

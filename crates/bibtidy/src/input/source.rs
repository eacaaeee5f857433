//! Bibliographic records, field values, and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved name prefix for annotation fields.
pub const ANNOTATION_PREFIX: &str = "__comment";

/// Rendering style of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// Rendered as `{value}`.
    Braced,
    /// Rendered as `"value"`.
    Quoted,
}

/// A field value: the unescaped user-visible text plus its rendering style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    /// The raw text, with no delimiters or format-specific escaping.
    pub raw: String,
    /// How the value is delimited when serialized.
    pub style: FieldStyle,
}

impl FieldValue {
    /// Create a braced value.
    pub fn braced(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            style: FieldStyle::Braced,
        }
    }

    /// Create a quoted value.
    pub fn quoted(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            style: FieldStyle::Quoted,
        }
    }
}

/// Normalized entry-type tag, computed once so the normalizer does not
/// re-fold case on every check. The original spelling stays on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Article,
    Proceedings,
    Book,
    Other,
}

impl EntryKind {
    /// Classify an entry type, case-insensitively.
    pub fn from_type(entry_type: &str) -> Self {
        match entry_type.to_ascii_lowercase().as_str() {
            "article" => EntryKind::Article,
            "proceedings" => EntryKind::Proceedings,
            "book" => EntryKind::Book,
            _ => EntryKind::Other,
        }
    }

    /// Whether the date/month rewrite applies to this kind.
    pub fn rewrites_dates(&self) -> bool {
        matches!(self, EntryKind::Article | EntryKind::Proceedings)
    }

    /// Whether the title rewrite applies to this kind.
    pub fn rewrites_title(&self) -> bool {
        !matches!(self, EntryKind::Book)
    }
}

/// One bibliographic entry: a type, a citation key, and an ordered field set.
#[derive(Debug, Clone)]
pub struct Record {
    /// Entry type as it appeared in the source (casing preserved for output).
    pub entry_type: String,
    /// Citation key, opaque.
    pub key: String,
    /// Fields keyed by lowercased name, in insertion order.
    fields: IndexMap<String, FieldValue>,
    /// Cached classification of `entry_type`.
    kind: EntryKind,
    /// Next candidate annotation index. Only ever advances; annotations are
    /// never removed, so this matches a first-unused rescan.
    annotation_cursor: usize,
}

impl Record {
    /// Create an empty record.
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        let entry_type = entry_type.into();
        let kind = EntryKind::from_type(&entry_type);
        Self {
            entry_type,
            key: key.into(),
            fields: IndexMap::new(),
            kind,
            annotation_cursor: 1,
        }
    }

    /// The cached entry-type classification.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Set a field. Field names are case-insensitive; replacing an existing
    /// field keeps its position, a new field is appended.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_ascii_lowercase(), value);
    }

    /// Look up a field by case-insensitive name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(&name.to_ascii_lowercase())
    }

    /// Whether a field is present.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove a field, preserving the relative order of the rest.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(&name.to_ascii_lowercase())
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields, annotations included.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Attach an annotation preserving some original value. Allocates the
    /// smallest unused `__comment<N>` slot (N >= 1) and stores the literal
    /// text with the quoted style.
    pub fn annotate(&mut self, text: impl Into<String>) {
        let mut index = self.annotation_cursor;
        while self.fields.contains_key(&annotation_name(index)) {
            index += 1;
        }
        self.fields
            .insert(annotation_name(index), FieldValue::quoted(text));
        self.annotation_cursor = index + 1;
    }

    /// Number of annotation fields currently on the record.
    pub fn annotation_count(&self) -> usize {
        self.fields
            .keys()
            .filter(|name| is_annotation_name(name.as_str()))
            .count()
    }
}

/// Field name for annotation slot `index`.
fn annotation_name(index: usize) -> String {
    format!("{}{}", ANNOTATION_PREFIX, index)
}

/// Whether a field name uses the reserved annotation convention.
fn is_annotation_name(name: &str) -> bool {
    name.strip_prefix(ANNOTATION_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}

/// An ordered collection of records, as loaded from one source.
#[derive(Debug, Clone, Default)]
pub struct BibDatabase {
    /// Records in source order.
    pub records: Vec<Record>,
}

impl BibDatabase {
    /// Create a database from a list of records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by citation key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.key == key)
    }
}

/// Metadata about the source file a database was loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Source format.
    pub format: String,
    /// Source encoding.
    pub encoding: String,
    /// Number of records loaded.
    pub record_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, record_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format: "bibtex".to_string(),
            encoding: "utf-8".to_string(),
            record_count,
            loaded_at: Utc::now(),
        }
    }
}

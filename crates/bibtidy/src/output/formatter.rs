//! BibTeX serialization.

use std::fs;
use std::path::Path;

use crate::error::{BibtidyError, Result};
use crate::input::{BibDatabase, FieldStyle, Record};

/// Renders databases back to BibTeX text.
///
/// Field insertion order and per-field rendering style are preserved
/// exactly; entries are indented with two spaces and separated by a blank
/// line.
pub struct Formatter;

impl Formatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render a whole database.
    pub fn render_all(&self, database: &BibDatabase) -> String {
        let mut out = String::new();
        for (i, record) in database.records.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_record(record, &mut out);
        }
        out
    }

    /// Render one record into `out`.
    pub fn render_record(&self, record: &Record, out: &mut String) {
        out.push('@');
        out.push_str(&record.entry_type);
        out.push('{');
        out.push_str(&record.key);
        for (name, value) in record.fields() {
            out.push_str(",\n  ");
            out.push_str(name);
            out.push_str(" = ");
            match value.style {
                FieldStyle::Braced => {
                    out.push('{');
                    out.push_str(&value.raw);
                    out.push('}');
                }
                FieldStyle::Quoted => {
                    out.push('"');
                    out.push_str(&value.raw);
                    out.push('"');
                }
            }
        }
        out.push_str("\n}\n");
    }

    /// Render a database and write it to a file.
    pub fn write_file(&self, database: &BibDatabase, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render_all(database)).map_err(|e| BibtidyError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

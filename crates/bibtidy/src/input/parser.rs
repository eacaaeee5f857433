//! BibTeX parser.
//!
//! A tolerant hand-rolled scanner: free text between entries is ignored,
//! `@comment` and `@preamble` blocks are skipped, and duplicate field names
//! within an entry resolve to the last occurrence. `@string` macros are not
//! supported and fail the parse rather than silently dropping definitions.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{BibDatabase, FieldValue, Record, SourceMetadata};
use crate::error::{BibtidyError, Result};

/// Parses BibTeX databases.
pub struct Parser;

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a file and return the database plus source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(BibDatabase, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| BibtidyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = String::from_utf8(contents).map_err(|e| {
            let line = line_of_offset(e.as_bytes(), e.utf8_error().valid_up_to());
            BibtidyError::Parse {
                line,
                message: "input is not valid UTF-8".to_string(),
            }
        })?;

        let database = self.parse_str(&text)?;
        let metadata = SourceMetadata::new(path.to_path_buf(), hash, size_bytes, database.len());

        Ok((database, metadata))
    }

    /// Parse BibTeX text directly.
    pub fn parse_str(&self, input: &str) -> Result<BibDatabase> {
        let mut scanner = Scanner::new(input);
        let mut records = Vec::new();

        while scanner.skip_to_entry() {
            let entry_type = scanner.take_identifier();
            if entry_type.is_empty() {
                return Err(scanner.error("expected entry type after '@'"));
            }

            match entry_type.to_ascii_lowercase().as_str() {
                "comment" | "preamble" => {
                    scanner.skip_block(&entry_type)?;
                }
                "string" => {
                    return Err(scanner.error("@string macros are not supported"));
                }
                _ => {
                    records.push(scanner.parse_entry(entry_type)?);
                }
            }
        }

        Ok(BibDatabase::new(records))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based line number of a byte offset.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Character scanner with line tracking.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> BibtidyError {
        BibtidyError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    /// Advance past free text to the next '@', consuming it.
    /// Returns false when the input is exhausted.
    fn skip_to_entry(&mut self) -> bool {
        while let Some(c) = self.bump() {
            if c == '@' {
                return true;
            }
        }
        false
    }

    /// Take an identifier: letters, digits, '_' or '-'.
    fn take_identifier(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    /// Skip a `@comment`/`@preamble` block: a balanced brace group.
    fn skip_block(&mut self, entry_type: &str) -> Result<()> {
        self.skip_whitespace();
        if self.peek() != Some('{') {
            return Err(self.error(format!("expected '{{' after @{}", entry_type)));
        }
        self.bump();
        self.take_balanced_braces()
            .map(|_| ())
            .ok_or_else(|| self.error(format!("unterminated @{} block", entry_type)))
    }

    /// Parse one `@type{key, name = value, ...}` entry. The '@' and the
    /// entry type have already been consumed.
    fn parse_entry(&mut self, entry_type: String) -> Result<Record> {
        self.skip_whitespace();
        if self.peek() != Some('{') {
            return Err(self.error(format!("expected '{{' after entry type '{}'", entry_type)));
        }
        self.bump();

        let key_start = self.pos;
        while self.peek().is_some_and(|c| c != ',' && c != '}') {
            self.bump();
        }
        let key = self.src[key_start..self.pos].trim().to_string();
        if key.is_empty() {
            return Err(self.error("missing citation key"));
        }

        let mut record = Record::new(entry_type, key);

        match self.bump() {
            Some('}') => return Ok(record),
            Some(',') => {}
            _ => return Err(self.error(format!("unterminated entry '{}'", record.key))),
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(record);
                }
                Some(_) => {}
                None => return Err(self.error(format!("unterminated entry '{}'", record.key))),
            }

            let name = self.take_identifier();
            if name.is_empty() {
                return Err(self.error(format!(
                    "expected field name in entry '{}'",
                    record.key
                )));
            }

            self.skip_whitespace();
            if self.peek() != Some('=') {
                return Err(self.error(format!("expected '=' after field name '{}'", name)));
            }
            self.bump();
            self.skip_whitespace();

            let value = self.parse_value(&name)?;
            record.set_field(&name, value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => {}
                Some('}') => return Ok(record),
                _ => {
                    return Err(self.error(format!(
                        "expected ',' or '}}' after value of field '{}'",
                        name
                    )))
                }
            }
        }
    }

    /// Parse a field value: braced, quoted, or bare.
    fn parse_value(&mut self, name: &str) -> Result<FieldValue> {
        match self.peek() {
            Some('{') => {
                self.bump();
                let raw = self
                    .take_balanced_braces()
                    .ok_or_else(|| self.error(format!("unterminated value of field '{}'", name)))?;
                Ok(FieldValue::braced(raw))
            }
            Some('"') => {
                self.bump();
                let raw = self
                    .take_quoted()
                    .ok_or_else(|| self.error(format!("unterminated value of field '{}'", name)))?;
                Ok(FieldValue::quoted(raw))
            }
            Some(_) => {
                let start = self.pos;
                while self.peek().is_some_and(|c| {
                    c != ',' && c != '{' && c != '}' && c != '"' && !c.is_whitespace()
                }) {
                    self.bump();
                }
                let raw = &self.src[start..self.pos];
                if raw.is_empty() {
                    return Err(self.error(format!("expected value for field '{}'", name)));
                }
                // Bare values (numbers, unquoted words) are normalized to
                // the braced style on output.
                Ok(FieldValue::braced(raw))
            }
            None => Err(self.error(format!("expected value for field '{}'", name))),
        }
    }

    /// Consume up to the brace matching an already-consumed '{', handling
    /// nesting. Returns the inner text verbatim.
    fn take_balanced_braces(&mut self) -> Option<String> {
        let start = self.pos;
        let mut depth = 1usize;
        while let Some(c) = self.peek() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let raw = self.src[start..self.pos].to_string();
                        self.bump();
                        return Some(raw);
                    }
                }
                _ => {}
            }
            self.bump();
        }
        None
    }

    /// Consume up to the closing quote of an already-consumed '"'. Braces
    /// may nest inside a quoted value; a quote inside a brace group does not
    /// terminate it.
    fn take_quoted(&mut self) -> Option<String> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                '"' if depth == 0 => {
                    let raw = self.src[start..self.pos].to_string();
                    self.bump();
                    return Some(raw);
                }
                _ => {}
            }
            self.bump();
        }
        None
    }
}

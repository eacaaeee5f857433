//! Normalization change ledger.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BibtidyError, Result};

/// A single field rewrite applied to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldChange {
    /// A `year` was extracted from `date`; `date` was soft-deleted.
    YearExtracted { date: String, year: String },
    /// `date` could not be parsed and was left in place, with a warning
    /// annotation.
    UnparsedDate { date: String },
    /// `date` was soft-deleted because `year` was already present.
    DateAnnotated { date: String },
    /// `month` was soft-deleted.
    MonthAnnotated { month: String },
    /// The title was re-capitalized.
    TitleRecased { original: String, fixed: String },
}

impl FieldChange {
    /// Human-readable description, used for progress lines.
    pub fn description(&self) -> String {
        match self {
            FieldChange::YearExtracted { date, year } => {
                format!("year={} extracted from date '{}'", year, date)
            }
            FieldChange::UnparsedDate { date } => {
                format!("could not extract year from date '{}'", date)
            }
            FieldChange::DateAnnotated { date } => {
                format!("date '{}' commented out (year already present)", date)
            }
            FieldChange::MonthAnnotated { month } => {
                format!("month '{}' commented out", month)
            }
            FieldChange::TitleRecased { fixed, .. } => {
                format!("title recased to '{}'", fixed)
            }
        }
    }

    /// Whether this change is a warning rather than a rewrite.
    pub fn is_warning(&self) -> bool {
        matches!(self, FieldChange::UnparsedDate { .. })
    }
}

/// All changes applied to one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordChange {
    /// Citation key of the record.
    pub key: String,
    /// Changes in application order.
    pub changes: Vec<FieldChange>,
}

/// Result of normalizing a database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeResult {
    /// Number of records examined.
    pub records_processed: usize,
    /// Number of records with at least one change.
    pub records_modified: usize,
    /// Number of `year` fields extracted from `date` fields.
    pub years_extracted: usize,
    /// Number of `date` fields that could not be parsed.
    pub unparsed_dates: usize,
    /// Number of `date` fields commented out next to an existing `year`.
    pub dates_annotated: usize,
    /// Number of `month` fields commented out.
    pub months_annotated: usize,
    /// Number of titles re-capitalized.
    pub titles_recased: usize,
    /// Per-record changes, for modified records only.
    pub changes: Vec<RecordChange>,
}

impl NormalizeResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one record.
    pub fn add_record(&mut self, key: impl Into<String>, changes: Vec<FieldChange>) {
        self.records_processed += 1;
        if changes.is_empty() {
            return;
        }

        self.records_modified += 1;
        for change in &changes {
            match change {
                FieldChange::YearExtracted { .. } => self.years_extracted += 1,
                FieldChange::UnparsedDate { .. } => self.unparsed_dates += 1,
                FieldChange::DateAnnotated { .. } => self.dates_annotated += 1,
                FieldChange::MonthAnnotated { .. } => self.months_annotated += 1,
                FieldChange::TitleRecased { .. } => self.titles_recased += 1,
            }
        }
        self.changes.push(RecordChange {
            key: key.into(),
            changes,
        });
    }

    /// Whether nothing was changed.
    pub fn is_clean(&self) -> bool {
        self.records_modified == 0
    }

    /// Save the ledger as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| BibtidyError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a ledger saved by [`NormalizeResult::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| BibtidyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

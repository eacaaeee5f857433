//! Year extraction from free-form date strings.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digit classes; `\d` would also match non-ASCII decimal digits.
static YEAR_EXACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})[-/][01]?[0-9]$").unwrap());
static YEAR_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})[-/][01]?[0-9][-/][0-3]?[0-9]$").unwrap());
static YEAR_ANYWHERE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// Extract a four-digit year from a date string.
///
/// Patterns are tried in a fixed order: `YYYY`, `YYYY-M`/`YYYY/MM`,
/// `YYYY-MM-DD` (full matches), then the first run of four digits anywhere
/// in the string. The first matching pattern wins. No numeric range check is
/// applied; "9999" is accepted.
pub fn extract_year(date: &str) -> Option<&str> {
    if YEAR_EXACT.is_match(date) {
        return Some(date);
    }
    if let Some(m) = YEAR_MONTH.captures(date).and_then(|c| c.get(1)) {
        return Some(m.as_str());
    }
    if let Some(m) = YEAR_MONTH_DAY.captures(date).and_then(|c| c.get(1)) {
        return Some(m.as_str());
    }
    YEAR_ANYWHERE.find(date).map(|m| m.as_str())
}

//! Fuzz target for year extraction.
//!
//! Verifies that extract_year never panics and only ever returns a
//! four-digit substring of its input.

#![no_main]

use bibtidy::extract_year;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Some(year) = extract_year(content) {
            assert_eq!(year.len(), 4);
            assert!(year.bytes().all(|b| b.is_ascii_digit()));
            assert!(content.contains(year));
        }
    }
});

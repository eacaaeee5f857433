//! Fuzz target for title recasing.
//!
//! Verifies that capitalize never panics and is deterministic on
//! pathological input.

#![no_main]

use bibtidy::capitalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let once = capitalize(content);
        let twice = capitalize(content);
        assert_eq!(once, twice);
    }
});

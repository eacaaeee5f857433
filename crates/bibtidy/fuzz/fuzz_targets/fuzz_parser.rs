//! Fuzz target for the BibTeX parser.
//!
//! Verifies that the parser:
//! 1. Never panics on any input
//! 2. Anything it accepts can be rendered and re-parsed

#![no_main]

use bibtidy::{Formatter, Parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 100_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let parser = Parser::new();
        if let Ok(db) = parser.parse_str(content) {
            // Accepted input must survive a render/parse round trip.
            let rendered = Formatter::new().render_all(&db);
            let reparsed = parser
                .parse_str(&rendered)
                .expect("rendered output must parse");
            assert_eq!(reparsed.len(), db.len());
        }
    }
});

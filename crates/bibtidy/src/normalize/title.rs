//! Title re-capitalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Segment delimiter: a period followed by one or more whitespace characters.
static SEGMENT_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

/// Re-capitalize a title, segment by segment.
///
/// Segments are delimited by a period plus trailing whitespace; each matched
/// delimiter is reinserted verbatim. Within a segment, words are split on
/// single spaces (runs of other whitespace yield empty words, which are kept
/// and rejoined with single spaces). A word with more than one uppercase
/// letter is presumed to be an acronym or proper noun and passes through
/// unchanged; otherwise the first word of a segment is title-cased and every
/// other word is lowercased.
///
/// Total over arbitrary input; the empty string maps to itself.
pub fn capitalize(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut start = 0;
    for delim in SEGMENT_DELIM.find_iter(title) {
        recase_segment(&title[start..delim.start()], &mut out);
        out.push_str(delim.as_str());
        start = delim.end();
    }
    recase_segment(&title[start..], &mut out);
    out
}

/// Re-case one segment's words into `out`.
fn recase_segment(segment: &str, out: &mut String) {
    for (i, word) in segment.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let uppercase_count = word.chars().filter(|c| c.is_uppercase()).count();
        if uppercase_count > 1 {
            out.push_str(word);
        } else if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        } else {
            out.push_str(&word.to_lowercase());
        }
    }
}

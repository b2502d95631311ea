use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Position-anchored timestamp range extraction

/// Separator between the start and end timestamps of a range
pub const RANGE_SEPARATOR: &str = " --> ";

// @const: SRT timestamp range regex
//
// Deliberately coarse: one or two digits per clock field, one to three
// fractional digits, matching what subtitle tools emit in the wild. Range
// validation of the digits happens at parse time, not here.
static RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}:\d{1,2}:\d{1,2},\d{1,3} --> \d{1,2}:\d{1,2}:\d{1,2},\d{1,3}").unwrap()
});

/// A single timestamp range occurrence located in a document.
///
/// Carries the byte span of the occurrence so rewriting can splice a
/// replacement at the exact position instead of searching the document again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    /// Byte range of the occurrence within the document
    pub span: Range<usize>,

    /// The matched range text, e.g. `00:00:10,000 --> 00:00:12,500`
    pub text: String,
}

/// Find every timestamp range in the document, in order of appearance.
///
/// Duplicate range strings produce one match per occurrence. A document with
/// no ranges yields an empty vector, not an error.
pub fn find_timestamp_ranges(document: &str) -> Vec<RangeMatch> {
    RANGE_REGEX
        .find_iter(document)
        .map(|m| RangeMatch {
            span: m.range(),
            text: m.as_str().to_string(),
        })
        .collect()
}

use anyhow::{anyhow, Result};

use crate::extractor::RangeMatch;

// @module: Span-based document rewriting

/// Rewrite a document by splicing a replacement string over each matched span.
///
/// Spans are consumed in document order: the text between matches is copied
/// verbatim and each replacement lands exactly at its recorded position. This
/// keeps substitution position-anchored, so a replacement that happens to
/// equal a later match's original text can never trigger a second,
/// unintended substitution.
pub fn splice_replacements(
    document: &str,
    matches: &[RangeMatch],
    replacements: &[String],
) -> Result<String> {
    if matches.len() != replacements.len() {
        return Err(anyhow!(
            "Replacement count mismatch: {} matches but {} replacements",
            matches.len(),
            replacements.len()
        ));
    }

    let mut output = String::with_capacity(document.len());
    let mut cursor = 0usize;

    for (range_match, replacement) in matches.iter().zip(replacements) {
        let span = &range_match.span;
        if span.start < cursor || span.end > document.len() {
            return Err(anyhow!(
                "Match span {}..{} is out of order or out of bounds for document of {} bytes",
                span.start,
                span.end,
                document.len()
            ));
        }

        output.push_str(&document[cursor..span.start]);
        output.push_str(replacement);
        cursor = span.end;
    }

    output.push_str(&document[cursor..]);
    Ok(output)
}

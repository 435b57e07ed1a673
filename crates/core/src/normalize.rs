//! Cell text normalisation.

use crate::constants::{LEGACY_MARKER, SENTENCE_DELIMITER};

/// Normalises raw cell text before tagging.
///
/// Absent cells normalise to an empty string. Every `\r` and `\n` is removed, which covers
/// CRLF, lone CR and lone LF alike, and every legacy `^` marker becomes `。`.
pub fn normalize_cell(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    raw.chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .map(|c| if c == LEGACY_MARKER { SENTENCE_DELIMITER } else { c })
        .collect()
}

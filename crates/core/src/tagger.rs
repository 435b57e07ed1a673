//! Flattens script rows into one stream of speaker-tagged characters.

use std::sync::Arc;

use crate::normalize::normalize_cell;
use crate::Row;

/// A single character of the script together with the speaker who says it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedChar {
    pub ch: char,
    pub speaker: Arc<str>,
}

/// Resolves the speaker of a row, falling back to `narrator` for blank labels.
pub fn resolve_speaker(speaker: Option<&str>, narrator: &str) -> String {
    match speaker.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => narrator.to_string(),
    }
}

/// Tags every character of every row with that row's speaker, in script order.
///
/// Rows whose text normalises to nothing are skipped entirely; they do not break a shot.
pub fn tag_rows(rows: &[Row], narrator: &str) -> Vec<TaggedChar> {
    let mut stream = Vec::new();

    for row in rows {
        let text = normalize_cell(row.text.as_deref());
        if text.is_empty() {
            continue;
        }

        let speaker: Arc<str> = resolve_speaker(row.speaker.as_deref(), narrator).into();
        stream.extend(text.chars().map(|ch| TaggedChar {
            ch,
            speaker: Arc::clone(&speaker),
        }));
    }

    tracing::debug!(rows = rows.len(), chars = stream.len(), "tagged script");
    stream
}

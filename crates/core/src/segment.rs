//! Splits the tagged stream into shots at each sentence delimiter.

use crate::constants::SENTENCE_DELIMITER;
use crate::{ShotId, TaggedChar};

/// One contiguous unit of dialogue, terminated by `。` or the end of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub id: ShotId,
    pub chars: Vec<TaggedChar>,
}

impl Shot {
    /// The shot's characters without speaker tags.
    pub fn text(&self) -> String {
        self.chars.iter().map(|t| t.ch).collect()
    }
}

/// Segments the stream into shots with ids 1, 2, 3... in stream order.
///
/// The delimiter itself is dropped. Consecutive or leading delimiters never produce an
/// empty shot. A shot holding only whitespace still takes its id, so prompt lines stay
/// aligned with the shots that follow it; it yields no runs once grouped.
pub fn segment(stream: Vec<TaggedChar>) -> Vec<Shot> {
    let mut shots = Vec::new();
    let mut next_id = ShotId::first();
    let mut current: Vec<TaggedChar> = Vec::new();

    let mut close = |current: &mut Vec<TaggedChar>, shots: &mut Vec<Shot>| {
        if current.is_empty() {
            return;
        }
        shots.push(Shot {
            id: next_id,
            chars: std::mem::take(current),
        });
        next_id = next_id.next();
    };

    for tagged in stream {
        if tagged.ch == SENTENCE_DELIMITER {
            close(&mut current, &mut shots);
        } else {
            current.push(tagged);
        }
    }
    close(&mut current, &mut shots);

    tracing::debug!(shots = shots.len(), "segmented script");
    shots
}

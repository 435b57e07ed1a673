//! Collapses a shot into runs of consecutive characters from the same speaker.

use std::sync::Arc;

use crate::{NonEmptyText, Shot, ShotId};

/// A maximal stretch of one shot spoken by a single speaker.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Run {
    pub shot_id: ShotId,
    pub speaker: String,
    pub text: NonEmptyText,
}

/// Groups the characters of `shot` into runs, in order.
///
/// Each run's text is trimmed; runs that trim to nothing are dropped. Runs never cross
/// a shot boundary because they are built from one shot at a time.
pub fn group_runs(shot: &Shot) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Option<(Arc<str>, String)> = None;

    for tagged in &shot.chars {
        if let Some((speaker, buffer)) = current.as_mut() {
            if *speaker == tagged.speaker {
                buffer.push(tagged.ch);
                continue;
            }
        }

        if let Some((speaker, buffer)) = current.take() {
            push_run(&mut runs, shot.id, &speaker, &buffer);
        }
        current = Some((Arc::clone(&tagged.speaker), tagged.ch.to_string()));
    }

    if let Some((speaker, buffer)) = current {
        push_run(&mut runs, shot.id, &speaker, &buffer);
    }

    runs
}

fn push_run(runs: &mut Vec<Run>, shot_id: ShotId, speaker: &str, buffer: &str) {
    if let Ok(text) = NonEmptyText::new(buffer) {
        runs.push(Run {
            shot_id,
            speaker: speaker.to_string(),
            text,
        });
    }
}

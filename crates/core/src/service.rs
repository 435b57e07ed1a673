//! Pipeline entry points.
//!
//! `ScriptService` wires the stages together. It holds only configuration, so the same
//! service can be shared between threads and every call rebuilds its output from scratch.

use std::collections::BTreeSet;

use crate::group::group_runs;
use crate::record::assemble;
use crate::segment::segment;
use crate::tagger::tag_rows;
use crate::{FinalRecord, PromptBlock, RoleNames, Row, Run, ScriptConfig, ScriptResult};

/// The output of splitting a script: every run of every shot, in script order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBreakdown {
    runs: Vec<Run>,
}

impl ScriptBreakdown {
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of distinct shots that produced at least one run.
    pub fn shot_count(&self) -> usize {
        self.runs
            .iter()
            .map(|run| run.shot_id)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Pure script operations - no I/O concerns
#[derive(Clone, Debug, Default)]
pub struct ScriptService {
    config: ScriptConfig,
}

impl ScriptService {
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    /// Splits script rows into shots and speaker runs.
    pub fn split(&self, rows: &[Row]) -> ScriptBreakdown {
        let stream = tag_rows(rows, self.config.narrator());
        let runs: Vec<Run> = segment(stream).iter().flat_map(group_runs).collect();

        let breakdown = ScriptBreakdown { runs };
        tracing::info!(
            shots = breakdown.shot_count(),
            runs = breakdown.run_count(),
            "split script"
        );
        breakdown
    }

    /// Joins a breakdown with its prompts and matched roles.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::NoShots` if the breakdown is empty, i.e. the script has not
    /// been split or contained no text.
    pub fn merge(
        &self,
        breakdown: &ScriptBreakdown,
        image: &PromptBlock,
        video: &PromptBlock,
        roles: &RoleNames,
    ) -> ScriptResult<Vec<FinalRecord>> {
        let records = assemble(breakdown.runs(), image, video, roles)?;

        let shots = breakdown.shot_count();
        for (label, block) in [("image", image), ("video", video)] {
            if block.line_count() < shots {
                tracing::warn!(
                    block = label,
                    lines = block.line_count(),
                    shots,
                    "prompt block shorter than shot count; missing prompts left empty"
                );
            }
        }

        tracing::info!(records = records.len(), "merged prompts");
        Ok(records)
    }
}

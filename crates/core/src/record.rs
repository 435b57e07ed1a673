//! Final record assembly.

use std::collections::BTreeMap;

use crate::prompts::{align, AlignedPrompt};
use crate::{PromptBlock, RoleNames, Run, ScriptError, ScriptResult, ShotId};

/// One row of the exported shot list.
///
/// Scene, emotion and intensity are left blank for manual annotation downstream.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FinalRecord {
    pub shot_id: String,
    pub speaker: String,
    pub text: String,
    pub scene: String,
    pub matched_roles: String,
    pub image_prompt: String,
    pub video_prompt: String,
    pub emotion: String,
    pub intensity: String,
}

impl FinalRecord {
    /// Cell values in export column order, see [`crate::constants::EXPORT_HEADERS`].
    pub fn to_cells(&self) -> [String; 9] {
        [
            self.shot_id.clone(),
            self.speaker.clone(),
            self.text.clone(),
            self.scene.clone(),
            self.matched_roles.clone(),
            self.image_prompt.clone(),
            self.video_prompt.clone(),
            self.emotion.clone(),
            self.intensity.clone(),
        ]
    }
}

/// Builds one record per run, in run order.
///
/// Prompts and matched roles are computed once per shot and shared by all of its runs.
///
/// # Errors
///
/// Returns `ScriptError::NoShots` if `runs` is empty.
pub fn assemble(
    runs: &[Run],
    image: &PromptBlock,
    video: &PromptBlock,
    roles: &RoleNames,
) -> ScriptResult<Vec<FinalRecord>> {
    if runs.is_empty() {
        return Err(ScriptError::NoShots);
    }

    let mut per_shot: BTreeMap<ShotId, (AlignedPrompt, String)> = BTreeMap::new();

    let records = runs
        .iter()
        .map(|run| {
            let (prompt, matched) = per_shot.entry(run.shot_id).or_insert_with(|| {
                let prompt = align(run.shot_id, image, video);
                let matched = roles.match_prompt(&prompt);
                (prompt, matched)
            });

            FinalRecord {
                shot_id: run.shot_id.to_string(),
                speaker: run.speaker.clone(),
                text: run.text.to_string(),
                scene: String::new(),
                matched_roles: matched.clone(),
                image_prompt: prompt.image_prompt.clone(),
                video_prompt: prompt.video_prompt.clone(),
                emotion: String::new(),
                intensity: String::new(),
            }
        })
        .collect();

    Ok(records)
}

/// Checks that there is something to export.
///
/// # Errors
///
/// Returns `ScriptError::NoRecords` if `records` is empty.
pub fn ensure_exportable(records: &[FinalRecord]) -> ScriptResult<()> {
    if records.is_empty() {
        return Err(ScriptError::NoRecords);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NonEmptyText;

    fn run(shot: u32, speaker: &str, text: &str) -> Run {
        Run {
            shot_id: ShotId::new(shot).unwrap(),
            speaker: speaker.to_string(),
            text: NonEmptyText::new(text).unwrap(),
        }
    }

    #[test]
    fn test_runs_of_one_shot_share_prompts() {
        let runs = vec![
            run(1, "苏晚", "你来了？"),
            run(1, "谢南辞", "嗯"),
            run(2, "旁白", "夜深了"),
        ];
        let image = PromptBlock::from_text("苏晚和谢南辞对视\n月夜");
        let video = PromptBlock::from_text("镜头推近");
        let roles = RoleNames::parse("苏晚,谢南辞");

        let records = assemble(&runs, &image, &video, &roles).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].shot_id, "1");
        assert_eq!(records[0].matched_roles, "苏晚,谢南辞");
        assert_eq!(records[1].image_prompt, records[0].image_prompt);
        assert_eq!(records[1].video_prompt, "镜头推近");
        assert_eq!(records[1].speaker, "谢南辞");

        assert_eq!(records[2].shot_id, "2");
        assert_eq!(records[2].image_prompt, "月夜");
        assert_eq!(records[2].video_prompt, "");
        assert_eq!(records[2].matched_roles, "");
    }

    #[test]
    fn test_annotation_fields_blank() {
        let records = assemble(
            &[run(1, "旁白", "开场")],
            &PromptBlock::default(),
            &PromptBlock::default(),
            &RoleNames::default(),
        )
        .unwrap();
        let cells = records[0].to_cells();
        assert_eq!(cells[0], "1");
        assert_eq!(cells[2], "开场");
        assert_eq!(cells[3], "");
        assert_eq!(cells[7], "");
        assert_eq!(cells[8], "");
    }

    #[test]
    fn test_assemble_requires_runs() {
        let result = assemble(
            &[],
            &PromptBlock::default(),
            &PromptBlock::default(),
            &RoleNames::default(),
        );
        assert!(matches!(result, Err(ScriptError::NoShots)));
    }

    #[test]
    fn test_ensure_exportable() {
        assert!(matches!(ensure_exportable(&[]), Err(ScriptError::NoRecords)));
    }
}

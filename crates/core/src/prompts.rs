//! Positional alignment of prompt lines to shots.
//!
//! Prompt blocks are written one line per shot: line 0 belongs to shot 1, line 1 to
//! shot 2 and so on. Blocks are often shorter than the script while a production pass
//! is still in progress, so a missing line is an empty prompt and never an error.

use crate::ShotId;

/// A line-oriented block of prompts, one line per shot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptBlock {
    lines: Vec<String>,
}

impl PromptBlock {
    /// Splits `text` on `\n`, keeping blank lines so positions stay aligned.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// The trimmed line for `shot_id`, or `""` when the block has no such line.
    pub fn line(&self, shot_id: ShotId) -> &str {
        self.lines
            .get(shot_id.index())
            .map(|line| line.trim())
            .unwrap_or("")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// The image and video prompts that belong to one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPrompt {
    pub shot_id: ShotId,
    pub image_prompt: String,
    pub video_prompt: String,
}

/// Looks up both prompts for `shot_id`.
pub fn align(shot_id: ShotId, image: &PromptBlock, video: &PromptBlock) -> AlignedPrompt {
    AlignedPrompt {
        shot_id,
        image_prompt: image.line(shot_id).to_string(),
        video_prompt: video.line(shot_id).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(n: u32) -> ShotId {
        ShotId::new(n).unwrap()
    }

    #[test]
    fn test_shorter_video_block() {
        let image = PromptBlock::from_text("a\nb");
        let video = PromptBlock::from_text("x");
        let aligned = align(shot(2), &image, &video);
        assert_eq!(aligned.image_prompt, "b");
        assert_eq!(aligned.video_prompt, "");
    }

    #[test]
    fn test_beyond_both_blocks_is_empty() {
        let image = PromptBlock::from_text("a\nb");
        let video = PromptBlock::from_text("x");
        let aligned = align(shot(40), &image, &video);
        assert_eq!(aligned.image_prompt, "");
        assert_eq!(aligned.video_prompt, "");
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_kept() {
        let block = PromptBlock::from_text("  first \r\n\nthird\r");
        assert_eq!(block.line_count(), 3);
        assert_eq!(block.line(shot(1)), "first");
        assert_eq!(block.line(shot(2)), "");
        assert_eq!(block.line(shot(3)), "third");
    }

    #[test]
    fn test_empty_text_is_single_blank_line() {
        let block = PromptBlock::from_text("");
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.line(shot(1)), "");
    }
}

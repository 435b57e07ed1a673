//! Character name matching against a shot's prompts.

use crate::constants::{PROMPT_JOINER, ROLE_SEPARATOR};
use crate::{AlignedPrompt, NonEmptyText};

/// Ordered list of candidate character names.
///
/// Order and duplicates are kept exactly as supplied; they carry through to the
/// matched role string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleNames(Vec<NonEmptyText>);

impl RoleNames {
    /// Parses a comma-separated list such as `苏晚,谢南辞,江柔`.
    ///
    /// Entries are trimmed and empty entries are discarded.
    pub fn parse(input: &str) -> Self {
        Self(
            input
                .split(ROLE_SEPARATOR)
                .filter_map(|name| NonEmptyText::new(name).ok())
                .collect(),
        )
    }

    pub fn names(&self) -> &[NonEmptyText] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names found in the shot's combined prompts, comma-joined in list order.
    ///
    /// Matching is exact-case substring containment on `image + " " + video`.
    pub fn match_prompt(&self, prompt: &AlignedPrompt) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let combined = [prompt.image_prompt.as_str(), prompt.video_prompt.as_str()]
            .join(PROMPT_JOINER);

        let separator = ROLE_SEPARATOR.to_string();
        self.0
            .iter()
            .map(NonEmptyText::as_str)
            .filter(|name| combined.contains(name))
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

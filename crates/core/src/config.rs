//! Script layout configuration.
//!
//! Resolved once at process startup and passed into [`crate::ScriptService`]. Library code
//! never reads environment variables; binaries read them and hand the raw values to
//! [`ScriptConfig::from_env_values`].

use crate::constants::{DEFAULT_SPEAKER_COLUMN, DEFAULT_TEXT_COLUMN, NARRATOR};
use crate::{NonEmptyText, ScriptError, ScriptResult};

/// Where to find speaker and text in a script row, and who speaks unlabelled rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    narrator: String,
    speaker_column: usize,
    text_column: usize,
}

impl ScriptConfig {
    /// Create a new `ScriptConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::InvalidInput` if the narrator is blank or both fields point at
    /// the same column.
    pub fn new(
        narrator: impl AsRef<str>,
        speaker_column: usize,
        text_column: usize,
    ) -> ScriptResult<Self> {
        let narrator = NonEmptyText::new(narrator)
            .map_err(|_| ScriptError::InvalidInput("narrator label cannot be empty".into()))?
            .into_string();

        if speaker_column == text_column {
            return Err(ScriptError::InvalidInput(format!(
                "speaker and text cannot share column {}",
                speaker_column
            )));
        }

        Ok(Self {
            narrator,
            speaker_column,
            text_column,
        })
    }

    /// Build a config from optional raw values, typically environment variables.
    ///
    /// Absent or blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::InvalidInput` if a column is not a non-negative integer, or if
    /// the resulting config is rejected by [`ScriptConfig::new`].
    pub fn from_env_values(
        narrator: Option<String>,
        speaker_column: Option<String>,
        text_column: Option<String>,
    ) -> ScriptResult<Self> {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        fn parse_column(name: &str, value: Option<String>, default: usize) -> ScriptResult<usize> {
            match non_blank(value) {
                Some(raw) => raw.parse::<usize>().map_err(|_| {
                    ScriptError::InvalidInput(format!(
                        "{} must be a column number, got {:?}",
                        name, raw
                    ))
                }),
                None => Ok(default),
            }
        }

        let narrator = non_blank(narrator).unwrap_or_else(|| NARRATOR.to_string());
        let speaker_column =
            parse_column("speaker column", speaker_column, DEFAULT_SPEAKER_COLUMN)?;
        let text_column = parse_column("text column", text_column, DEFAULT_TEXT_COLUMN)?;

        Self::new(narrator, speaker_column, text_column)
    }

    /// Speaker label given to rows with a blank speaker cell.
    pub fn narrator(&self) -> &str {
        &self.narrator
    }

    pub fn speaker_column(&self) -> usize {
        self.speaker_column
    }

    pub fn text_column(&self) -> usize {
        self.text_column
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            narrator: NARRATOR.to_string(),
            speaker_column: DEFAULT_SPEAKER_COLUMN,
            text_column: DEFAULT_TEXT_COLUMN,
        }
    }
}

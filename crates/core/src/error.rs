#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Prompts were merged before the script was split into shots.
    #[error("no shots available: split the script before merging prompts")]
    NoShots,
    /// An export was requested before any records were merged.
    #[error("no records available: merge prompts before exporting")]
    NoRecords,
}

pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

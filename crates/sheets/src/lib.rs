//! Dubbing Sheets
//!
//! The I/O edges of the dubbing pipeline. Everything here either produces input for
//! `dubbing-core` or consumes its output; no segmentation logic lives in this crate.
//!
//! - [`read_script_rows`]: first worksheet of a script workbook → [`Row`]s
//! - [`read_prompt_file`]: UTF-8 text file → [`PromptBlock`]
//! - [`write_records`]: [`FinalRecord`]s → export workbook, written atomically
//!
//! ## Example Usage
//!
//! ```no_run
//! use dubbing_core::{PromptBlock, RoleNames, ScriptConfig, ScriptService};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScriptConfig::default();
//! let rows = dubbing_sheets::read_script_rows(Path::new("script.xlsx"), &config)?;
//!
//! let service = ScriptService::new(config);
//! let breakdown = service.split(&rows);
//! let records = service.merge(
//!     &breakdown,
//!     &dubbing_sheets::read_prompt_file(Path::new("image.txt"))?,
//!     &PromptBlock::default(),
//!     &RoleNames::parse("苏晚,谢南辞"),
//! )?;
//! dubbing_sheets::write_records(Path::new("镜头列表.xlsx"), &records)?;
//! # Ok(())
//! # }
//! ```

mod export;
mod prompt_file;
mod workbook;

pub use dubbing_core::{FinalRecord, PromptBlock, Row};
pub use export::write_records;
pub use prompt_file::read_prompt_file;
pub use workbook::read_script_rows;

use std::path::PathBuf;

/// Errors that can occur while reading inputs or writing the export
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// Source workbook or prompt file could not be opened or decoded
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// Export could not be written; nothing was left at the target path
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// A pipeline precondition was not met
    #[error(transparent)]
    Script(#[from] dubbing_core::ScriptError),
}

impl SheetsError {
    pub(crate) fn read(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

use std::fs;
use std::path::Path;

use dubbing_core::PromptBlock;

use crate::SheetsError;

/// Reads a UTF-8 prompt file, one prompt per line.
///
/// A leading byte-order mark is dropped so it does not end up in the first prompt.
///
/// # Errors
///
/// Returns `SheetsError::Read` if the file cannot be read or is not valid UTF-8.
pub fn read_prompt_file(path: &Path) -> Result<PromptBlock, SheetsError> {
    let content = fs::read_to_string(path).map_err(|e| SheetsError::read(path, e))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let block = PromptBlock::from_text(content);
    tracing::debug!(path = %path.display(), lines = block.line_count(), "read prompt file");
    Ok(block)
}

//! Line chunking for preparing raw script text.
//!
//! Writers paste plain text with one sentence per line. Each line gets the sentence
//! delimiter appended so it becomes its own shot once pasted into the script sheet, and
//! the result is cut into chunks small enough to paste in one go.

use crate::constants::{MAX_LINES_PER_CHUNK, SENTENCE_DELIMITER};
use crate::{ScriptError, ScriptResult};

/// One chunk of delimited lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position of this chunk.
    pub index: usize,
    /// Number of chunks produced alongside this one.
    pub total: usize,
    pub text: String,
}

/// Appends `。` to every line of `text` and groups the lines into chunks.
///
/// Blank input yields no chunks. Lines are split on `\n` only and are otherwise kept
/// verbatim, blank lines included.
///
/// # Errors
///
/// Returns `ScriptError::InvalidInput` if `lines_per_chunk` is 0 or larger than
/// 99 999.
pub fn chunk_lines(text: &str, lines_per_chunk: usize) -> ScriptResult<Vec<Chunk>> {
    if !(1..=MAX_LINES_PER_CHUNK).contains(&lines_per_chunk) {
        return Err(ScriptError::InvalidInput(format!(
            "lines per chunk must be between 1 and {}, got {}",
            MAX_LINES_PER_CHUNK, lines_per_chunk
        )));
    }

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| format!("{}{}", line, SENTENCE_DELIMITER))
        .collect();

    let total = lines.len().div_ceil(lines_per_chunk);
    let chunks = lines
        .chunks(lines_per_chunk)
        .enumerate()
        .map(|(i, group)| Chunk {
            index: i + 1,
            total,
            text: group.join("\n"),
        })
        .collect();

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_delimiter_to_each_line() {
        let chunks = chunk_lines("第一句\n第二句", 150).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "第一句。\n第二句。");
        assert_eq!((chunks[0].index, chunks[0].total), (1, 1));
    }

    #[test]
    fn test_groups_by_line_count() {
        let chunks = chunk_lines("a\nb\nc\nd\ne", 2).unwrap();
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a。\nb。", "c。\nd。", "e。"]);
        assert!(chunks.iter().all(|c| c.total == 3));
        assert_eq!(chunks[2].index, 3);
    }

    #[test]
    fn test_blank_lines_kept() {
        let chunks = chunk_lines("a\n\nb", 10).unwrap();
        assert_eq!(chunks[0].text, "a。\n。\nb。");
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(chunk_lines(" \n\t", 150).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_chunk_size() {
        assert!(matches!(
            chunk_lines("a", 0),
            Err(ScriptError::InvalidInput(_))
        ));
        assert!(matches!(
            chunk_lines("a", 100_000),
            Err(ScriptError::InvalidInput(_))
        ));
    }
}

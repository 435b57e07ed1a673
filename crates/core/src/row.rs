use crate::ScriptConfig;

/// One line of the dubbing script as handed over by the row source.
///
/// Both fields are optional because spreadsheet cells may be empty; see
/// [`crate::tagger::tag_rows`] for how absent values are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub speaker: Option<String>,
    pub text: Option<String>,
}

impl Row {
    pub fn new(speaker: Option<&str>, text: Option<&str>) -> Self {
        Self {
            speaker: speaker.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    /// Picks the speaker and text cells out of a full spreadsheet row.
    ///
    /// Rows shorter than the configured columns yield absent fields.
    pub fn from_cells(cells: &[Option<String>], config: &ScriptConfig) -> Self {
        Self {
            speaker: cells.get(config.speaker_column()).cloned().flatten(),
            text: cells.get(config.text_column()).cloned().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_uses_configured_columns() {
        let mut cells = vec![None; 8];
        cells[1] = Some("苏晚".to_string());
        cells[7] = Some("你好^".to_string());

        let row = Row::from_cells(&cells, &ScriptConfig::default());
        assert_eq!(row, Row::new(Some("苏晚"), Some("你好^")));
    }

    #[test]
    fn test_from_cells_short_row() {
        let cells = vec![Some("1".to_string()), Some("苏晚".to_string())];
        let row = Row::from_cells(&cells, &ScriptConfig::default());
        assert_eq!(row.speaker.as_deref(), Some("苏晚"));
        assert_eq!(row.text, None);
    }
}

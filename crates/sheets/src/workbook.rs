//! Script workbook reader.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use dubbing_core::{Row, ScriptConfig};

use crate::SheetsError;

/// Reads script rows from the first worksheet of the workbook at `path`.
///
/// calamine exposes no active-sheet accessor, so the first sheet in workbook order is
/// used even when another sheet was active when the file was saved.
///
/// Row 0 is the header and is skipped. Speaker and text are taken from the columns named
/// in `config`, counted from column A regardless of where the used range starts.
///
/// # Errors
///
/// Returns `SheetsError::Read` if the file cannot be opened, is not a supported workbook,
/// or has no worksheet. No rows are returned on failure.
pub fn read_script_rows(path: &Path, config: &ScriptConfig) -> Result<Vec<Row>, SheetsError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SheetsError::read(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetsError::read(path, "workbook has no worksheets"))?
        .map_err(|e| SheetsError::read(path, e))?;

    let rows = rows_from_range(&range, config);
    tracing::debug!(path = %path.display(), rows = rows.len(), "read script rows");
    Ok(rows)
}

fn rows_from_range(range: &Range<Data>, config: &ScriptConfig) -> Vec<Row> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };
    let width = config.speaker_column().max(config.text_column()) + 1;

    (1..=last_row)
        .map(|row| {
            let cells: Vec<Option<String>> = (0..width)
                .map(|col| cell_text(range.get_value((row, col as u32))))
                .collect();
            Row::from_cells(&cells, config)
        })
        .collect()
}

/// Cell value as text. Numeric zero and `FALSE` count as empty cells, like a blank.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell {
        None | Some(Data::Empty) | Some(Data::Bool(false)) | Some(Data::Int(0)) => None,
        Some(Data::Float(f)) if *f == 0.0 => None,
        Some(Data::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::fs;
    use tempfile::TempDir;

    /// Writes a script workbook with a header row and `(speaker, text)` rows in columns B/H.
    fn write_script(path: &Path, rows: &[(Option<&str>, Option<&str>)]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "序号").unwrap();
        sheet.write_string(0, 1, "角色").unwrap();
        sheet.write_string(0, 7, "台词").unwrap();
        for (i, (speaker, text)) in rows.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_number(row, 0, (i + 1) as f64).unwrap();
            if let Some(speaker) = speaker {
                sheet.write_string(row, 1, *speaker).unwrap();
            }
            if let Some(text) = text {
                sheet.write_string(row, 7, *text).unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_reads_speaker_and_text_columns() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("script.xlsx");
        write_script(
            &path,
            &[
                (Some("苏晚"), Some("你好^")),
                (None, Some("今天天气不错^")),
                (Some("谢南辞"), None),
            ],
        );

        let rows = read_script_rows(&path, &ScriptConfig::default()).unwrap();
        assert_eq!(
            rows,
            vec![
                Row::new(Some("苏晚"), Some("你好^")),
                Row::new(None, Some("今天天气不错^")),
                Row::new(Some("谢南辞"), None),
            ]
        );
    }

    #[test]
    fn test_header_only_workbook_has_no_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.xlsx");
        write_script(&path, &[]);

        let rows = read_script_rows(&path, &ScriptConfig::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = read_script_rows(&temp.path().join("missing.xlsx"), &ScriptConfig::default());
        assert!(matches!(result, Err(SheetsError::Read { .. })));
    }

    #[test]
    fn test_garbage_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.xlsx");
        fs::write(&path, "not a workbook").unwrap();

        let result = read_script_rows(&path, &ScriptConfig::default());
        assert!(matches!(result, Err(SheetsError::Read { .. })));
    }

    #[test]
    fn test_numeric_cells_read_as_text() {
        assert_eq!(cell_text(Some(&Data::Float(3.0))), Some("3".to_string()));
        assert_eq!(cell_text(Some(&Data::Empty)), None);
        assert_eq!(cell_text(None), None);
    }

    #[test]
    fn test_zero_cells_count_as_empty() {
        assert_eq!(cell_text(Some(&Data::Int(0))), None);
        assert_eq!(cell_text(Some(&Data::Float(0.0))), None);
        assert_eq!(cell_text(Some(&Data::Bool(false))), None);
        assert_eq!(cell_text(Some(&Data::Int(7))), Some("7".to_string()));
    }

    #[test]
    fn test_zero_text_cell_skips_row() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zero.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 7, "台词").unwrap();
        sheet.write_number(1, 1, 0.0).unwrap();
        sheet.write_number(1, 7, 0.0).unwrap();
        sheet.write_string(2, 7, "你好^").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_script_rows(&path, &ScriptConfig::default()).unwrap();
        assert_eq!(
            rows,
            vec![Row::new(None, None), Row::new(None, Some("你好^"))]
        );
    }
}

//! Shot list export.
//!
//! The workbook is rendered fully in memory, written to a temporary file in the target
//! directory and then renamed over the target. A failure at any step leaves the target
//! untouched.

use std::io::Write;
use std::path::Path;

use dubbing_core::constants::{EXPORT_HEADERS, EXPORT_SHEET_NAME};
use dubbing_core::{ensure_exportable, FinalRecord};
use rust_xlsxwriter::{Workbook, XlsxError};
use tempfile::NamedTempFile;

use crate::SheetsError;

/// Writes `records` under the fixed nine-column header to a new workbook at `path`.
///
/// All cells, including the shot id, are written as text.
///
/// # Errors
///
/// Returns `SheetsError::Script` wrapping `ScriptError::NoRecords` if `records` is empty,
/// and `SheetsError::Write` if the workbook cannot be rendered or saved.
pub fn write_records(path: &Path, records: &[FinalRecord]) -> Result<(), SheetsError> {
    ensure_exportable(records)?;

    let buffer = render(records).map_err(|e| SheetsError::write(path, e))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SheetsError::write(path, e))?;
    tmp.write_all(&buffer)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| SheetsError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| SheetsError::write(path, e.error))?;

    tracing::info!(path = %path.display(), records = records.len(), "exported shot list");
    Ok(())
}

fn render(records: &[FinalRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in record.to_cells().iter().enumerate() {
            // Blank annotation columns stay as empty cells.
            if value.is_empty() {
                continue;
            }
            sheet.write_string(row, col as u16, value)?;
        }
    }

    workbook.save_to_buffer()
}

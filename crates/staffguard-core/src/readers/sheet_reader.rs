use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use crate::errors::PipelineError;
use crate::record::RawRecord;

pub const TRANSACTIONS_SHEET: &str = "Transactions";
pub const TARGETS_SHEET: &str = "Targets";

fn cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read one worksheet into records keyed by its first row.
///
/// The workbook format (xlsx, xls, ods, ...) is picked from the extension.
pub fn read_sheet(path: impl AsRef<Path>, sheet: &str) -> Result<Vec<RawRecord>, PipelineError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| PipelineError::Workbook {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(PipelineError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| PipelineError::Workbook {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header
        .iter()
        .map(|cell| cell_value(cell).unwrap_or_default())
        .collect();

    let records = rows
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .map(|(name, cell)| (name.clone(), cell_value(cell)))
                .collect::<RawRecord>()
        })
        .collect();
    Ok(records)
}

fn read_sheet_or_empty(path: &Path, sheet: &str) -> Vec<RawRecord> {
    match read_sheet(path, sheet) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

/// Rows of the "Transactions" sheet, empty when unavailable.
pub fn load_transactions(path: impl AsRef<Path>) -> Vec<RawRecord> {
    read_sheet_or_empty(path.as_ref(), TRANSACTIONS_SHEET)
}

/// Rows of the "Targets" sheet, empty when unavailable.
pub fn load_targets(path: impl AsRef<Path>) -> Vec<RawRecord> {
    read_sheet_or_empty(path.as_ref(), TARGETS_SHEET)
}

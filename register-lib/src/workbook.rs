use calamine::{Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

use crate::cell::CellValue;
use crate::error::{RegisterError, Result};

/// Read one sheet of a workbook into rows of cells, header row included.
///
/// Any format calamine recognizes is accepted (xlsx, xlsm, xlsb, xls, ods).
/// Without a sheet name the first sheet is read.
pub fn read_sheet_rows(bytes: Vec<u8>, sheet_name: Option<&str>) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names();

    let name = match sheet_name {
        Some(name) => {
            if !sheet_names.iter().any(|candidate| candidate == name) {
                return Err(RegisterError::SheetNotFound {
                    name: name.to_string(),
                    available: sheet_names,
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or(RegisterError::EmptyWorkbook)?,
    };

    let range = match workbook.worksheet_range(&name) {
        Ok(range) => range,
        Err(e) => {
            return Err(RegisterError::SheetRead {
                name,
                message: e.to_string(),
            });
        }
    };

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    if rows.is_empty() {
        return Err(RegisterError::EmptySheet(name));
    }

    Ok(rows)
}

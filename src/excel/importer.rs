//! Excel importer implementation - workbook bytes → named sheet grids

use crate::error::{MisError, MisResult};
use crate::types::{Cell, NamedSheet, SheetGrid, Workbook};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads a workbook (xlsx, xlsm, xlsb, xls or ods) into plain grids.
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the file, then decode it.
    ///
    /// Read failures surface as [`MisError::Io`], decode failures as
    /// [`MisError::Workbook`].
    pub fn import(&self) -> MisResult<Workbook> {
        let bytes = std::fs::read(&self.path)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read workbook file");
        Self::from_bytes(bytes)
    }

    /// Decode an in-memory workbook, sniffing the format from its content.
    ///
    /// A panic inside the decoder is reported as [`MisError::Workbook`]
    /// instead of taking the process down.
    pub fn from_bytes(bytes: Vec<u8>) -> MisResult<Workbook> {
        std::panic::catch_unwind(AssertUnwindSafe(|| decode(bytes))).unwrap_or_else(|_| {
            Err(MisError::Workbook(
                "Workbook decoder panicked on malformed input".to_string(),
            ))
        })
    }
}

fn decode(bytes: Vec<u8>) -> MisResult<Workbook> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| MisError::Workbook(format!("Failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook.worksheet_range(&name).map_err(|e| {
            MisError::Workbook(format!("Failed to read sheet '{}': {}", name, e))
        })?;
        sheets.push(NamedSheet {
            grid: range_to_grid(&range),
            name,
        });
    }

    Ok(Workbook { sheets })
}

/// Convert a calamine range to a grid anchored at A1.
///
/// calamine ranges start at the first used cell, so leading blank rows and
/// columns are padded back in to keep column indices absolute.
fn range_to_grid(range: &Range<Data>) -> SheetGrid {
    let Some((start_row, start_col)) = range.start() else {
        return SheetGrid::default();
    };
    let start_col = start_col as usize;

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
    for source in range.rows() {
        let mut row = vec![Cell::Empty; start_col];
        row.extend(source.iter().map(convert_cell));
        rows.push(row);
    }

    SheetGrid::new(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::DateSerial(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

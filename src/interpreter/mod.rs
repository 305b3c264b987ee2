//! Sheet interpreter
//!
//! Turns one sheet's grid into header metadata plus the ordered data rows of
//! the report body:
//!
//! 1. scan the whole grid for the branch and report-month markers
//! 2. locate the `No | Particular` header row
//! 3. walk the body, carrying category labels down and dropping rows without
//!    a reference or with a `total` reference
//!
//! Sheets that are not MIS reports yield `None`; that is a normal outcome,
//! not an error.

pub mod dates;
pub mod metadata;

pub use metadata::scan_metadata;

use crate::schema::ColumnMap;
use crate::types::{DataRow, SheetGrid, SheetResult};
use tracing::debug;

/// Interpret one sheet. Returns `None` when the sheet is not a recognized
/// MIS report.
pub fn interpret(sheet_name: &str, grid: &SheetGrid, layout: &ColumnMap) -> Option<SheetResult> {
    let Some(metadata) = scan_metadata(grid) else {
        debug!(sheet = sheet_name, "skipping sheet: branch or report month marker missing");
        return None;
    };

    let Some(header_row) = locate_header_row(grid, layout) else {
        debug!(sheet = sheet_name, "skipping sheet: no 'No | Particular' header row");
        return None;
    };

    let rows = extract_rows(grid, header_row + 1, layout);
    debug!(
        sheet = sheet_name,
        header_row,
        rows = rows.len(),
        "interpreted sheet"
    );

    Some(SheetResult {
        sheet_name: sheet_name.to_string(),
        metadata,
        rows,
    })
}

/// Index of the first row whose "No" column reads exactly `no` and whose
/// "Particular" column contains `particular` (both case-insensitive).
pub fn locate_header_row(grid: &SheetGrid, layout: &ColumnMap) -> Option<usize> {
    (0..grid.row_count()).find(|&row| {
        grid.cell(row, layout.no).normalized() == "no"
            && grid
                .cell(row, layout.particular)
                .normalized()
                .contains("particular")
    })
}

/// Extract data rows from `start_row` to the end of the grid.
///
/// A non-blank "No" cell starts a new category and, only then, a non-blank
/// "Particular" cell renames it. Continuation rows inherit both labels. The
/// carry-over is updated before the reference check, so total rows can still
/// open a category.
pub fn extract_rows(grid: &SheetGrid, start_row: usize, layout: &ColumnMap) -> Vec<DataRow> {
    let mut rows = Vec::new();
    let mut last_no = String::new();
    let mut last_particular = String::new();

    for row in start_row..grid.row_count() {
        let no_cell = grid.cell(row, layout.no);
        if !no_cell.is_blank() {
            last_no = no_cell.text();
            let particular_cell = grid.cell(row, layout.particular);
            if !particular_cell.is_blank() {
                last_particular = particular_cell.text();
            }
        }

        let reference = grid.cell(row, layout.reference);
        if reference.is_blank() || reference.normalized() == "total" {
            continue;
        }

        let particular = match layout.sub_label.map(|col| grid.cell(row, col)) {
            Some(label) if !label.is_blank() => format!("{} - {}", last_particular, label.text()),
            _ => last_particular.clone(),
        };

        rows.push(DataRow {
            no: last_no.clone(),
            particular,
            reference: reference.text(),
            units: grid.cell(row, layout.units).text(),
            previous_month: grid.cell(row, layout.previous_month).number_or_zero(),
            increased: grid.cell(row, layout.increased).number_or_zero(),
            decreased: grid.cell(row, layout.decreased).number_or_zero(),
            this_month: layout
                .this_month
                .map(|col| grid.cell(row, col).number_or_zero()),
        });
    }

    rows
}

//! SQL writer: one multi-row `INSERT` statement per interpreted sheet

use crate::schema::{SqlColumn, TableSchema};
use crate::types::{format_number, DataRow, HeaderMetadata, SheetResult};

/// Per-run values that do not come from the workbook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterParams {
    pub office_id: Option<i64>,
}

/// Quote a text literal, doubling every single quote
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render a sheet as:
///
/// ```text
/// INSERT INTO mis_reports (no, particular, ...)
/// VALUES
/// ('1', 'Savings', ...),
/// ('2', 'Loans', ...);
/// ```
///
/// Returns `None` when the sheet has no rows.
pub fn write_insert(
    result: &SheetResult,
    schema: &TableSchema,
    params: &WriterParams,
) -> Option<String> {
    if result.rows.is_empty() {
        return None;
    }

    let values = result
        .rows
        .iter()
        .map(|row| write_tuple(row, &result.metadata, schema, params))
        .collect::<Vec<_>>()
        .join(",\n");

    Some(format!(
        "INSERT INTO {} ({})\nVALUES\n{};",
        schema.table,
        schema.column_list(),
        values
    ))
}

fn write_tuple(
    row: &DataRow,
    metadata: &HeaderMetadata,
    schema: &TableSchema,
    params: &WriterParams,
) -> String {
    let fields: Vec<String> = schema
        .columns
        .iter()
        .map(|column| match column {
            SqlColumn::No => quote_literal(&row.no),
            SqlColumn::Particular => quote_literal(&row.particular),
            SqlColumn::Ref => quote_literal(&row.reference),
            SqlColumn::Units => quote_literal(&row.units),
            SqlColumn::PreviousMonth => format_number(row.previous_month),
            SqlColumn::Increased => format_number(row.increased),
            SqlColumn::Decreased => format_number(row.decreased),
            SqlColumn::ThisMonth => format_number(row.this_month.unwrap_or(0.0)),
            SqlColumn::ReportMonth => quote_literal(&metadata.report_month),
            SqlColumn::BranchName => quote_literal(&metadata.branch_name),
            // Checked before conversion starts; NULL only for direct callers
            SqlColumn::OfficeId => params
                .office_id
                .map_or_else(|| "NULL".to_string(), |id| id.to_string()),
            SqlColumn::CreatedBy => quote_literal(&schema.created_by),
        })
        .collect();

    format!("({})", fields.join(", "))
}

//! Conversion pipeline: workbook → interpreted sheets → SQL statements
//!
//! Parameters are validated before the workbook is touched. Whole-file
//! failures abort with one error; sheets that are not MIS reports are
//! skipped without one.

use crate::error::{MisError, MisResult};
use crate::excel::ExcelImporter;
use crate::interpreter::interpret;
use crate::schema::TableSchema;
use crate::types::{SheetResult, SheetSql, Workbook};
use crate::writer::{write_insert, WriterParams};
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub const MISSING_OFFICE_ID: &str = "Please enter an Office ID.";
pub const INVALID_OFFICE_ID: &str = "Office ID must be a whole number.";

/// Validate the user-supplied office ID against the active schema.
///
/// Blank input counts as absent. An absent ID is only an error when the
/// schema writes an `office_id` column; a malformed one is always an error.
pub fn parse_params(office_id: Option<&str>, schema: &TableSchema) -> MisResult<WriterParams> {
    let office_id = match office_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => Some(
            text.parse::<i64>()
                .map_err(|_| MisError::Validation(INVALID_OFFICE_ID.to_string()))?,
        ),
        None => None,
    };

    if office_id.is_none() && schema.requires_office_id() {
        return Err(MisError::Validation(MISSING_OFFICE_ID.to_string()));
    }

    Ok(WriterParams { office_id })
}

/// Interpret every sheet, in workbook order, dropping unrecognized ones.
pub fn inspect_workbook(workbook: &Workbook, schema: &TableSchema) -> Vec<SheetResult> {
    workbook
        .sheets
        .iter()
        .filter_map(|sheet| interpret(&sheet.name, &sheet.grid, &schema.layout))
        .collect()
}

/// One statement per recognized sheet that has at least one data row.
pub fn convert_workbook(
    workbook: &Workbook,
    schema: &TableSchema,
    params: &WriterParams,
) -> Vec<SheetSql> {
    inspect_workbook(workbook, schema)
        .into_iter()
        .filter_map(|result| {
            let sql = write_insert(&result, schema, params)?;
            info!(
                sheet = %result.sheet_name,
                rows = result.rows.len(),
                branch = %result.metadata.branch_name,
                report_month = %result.metadata.report_month,
                "generated INSERT statement"
            );
            Some(SheetSql {
                sheet_name: result.sheet_name,
                sql,
            })
        })
        .collect()
}

/// Validate parameters, load the workbook at `path`, and convert it.
pub fn convert_path(
    path: &Path,
    schema: &TableSchema,
    office_id: Option<&str>,
) -> MisResult<Vec<SheetSql>> {
    let params = parse_params(office_id, schema)?;
    let workbook = ExcelImporter::new(path).import()?;
    Ok(convert_workbook(&workbook, schema, &params))
}

/// Validate parameters, decode an uploaded workbook, and convert it.
pub fn convert_bytes(
    bytes: Vec<u8>,
    schema: &TableSchema,
    office_id: Option<&str>,
) -> MisResult<Vec<SheetSql>> {
    let params = parse_params(office_id, schema)?;
    let workbook = ExcelImporter::from_bytes(bytes)?;
    Ok(convert_workbook(&workbook, schema, &params))
}

/// Where a conversion stands, as shown to the person who started it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionStatus {
    #[default]
    Idle,
    Loading,
    Done { results: Vec<SheetSql> },
    Failed { message: String },
}

impl ConversionStatus {
    pub fn from_result(result: MisResult<Vec<SheetSql>>) -> Self {
        match result {
            Ok(results) => ConversionStatus::Done { results },
            Err(e) => ConversionStatus::Failed {
                message: e.user_message(),
            },
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ConversionStatus::Done { .. })
    }
}

//! Excel import for MIS report workbooks
//!
//! Decodes a workbook with calamine and hands each sheet to the interpreter
//! as a plain [`SheetGrid`](crate::types::SheetGrid).

mod importer;

pub use importer::ExcelImporter;

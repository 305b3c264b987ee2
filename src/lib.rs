//! MIS SQL - MIS report spreadsheets to SQL `INSERT` statements
//!
//! Each sheet of a workbook is interpreted on its own: the branch name and
//! report month are read from free-form header rows, the report table is
//! located by its `No | Particular` header, and every body row carrying a
//! reference becomes one value tuple of an `INSERT` statement.
//!
//! # Example
//!
//! ```no_run
//! use mis_sql::convert::convert_path;
//! use mis_sql::schema::TableSchema;
//! use std::path::Path;
//!
//! let schema = TableSchema::branch();
//! let statements = convert_path(Path::new("Yangon MIS Reports.xlsx"), &schema, None)?;
//!
//! for statement in &statements {
//!     println!("-- {}\n{}", statement.sheet_name, statement.sql);
//! }
//! # Ok::<(), mis_sql::error::MisError>(())
//! ```

pub mod api;
pub mod cli;
pub mod convert;
pub mod error;
pub mod excel;
pub mod interpreter;
pub mod schema;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use convert::{convert_bytes, convert_path, ConversionStatus};
pub use error::{MisError, MisResult};
pub use schema::{ColumnMap, SqlColumn, TableSchema};
pub use types::{Cell, DataRow, HeaderMetadata, SheetGrid, SheetResult, SheetSql, Workbook};

//! MIS SQL API Server module
//!
//! Upload a workbook over HTTP and receive the generated statements as JSON.
//! Run with `mis-sql-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;

//! MIS SQL API Server binary
//!
//! HTTP front end for converting uploaded MIS report workbooks.

use clap::Parser;
use mis_sql::api::{run_api_server, server::ApiConfig};
use mis_sql::schema::TableSchema;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mis-sql-server")]
#[command(version)]
#[command(about = "MIS SQL API Server - convert uploaded MIS report workbooks to SQL")]
#[command(long_about = r#"
MIS SQL API Server

Endpoints:
  - POST /api/v1/convert   - Body: workbook bytes
                             Query: office_id=<n>, schema=<branch|office>
  - GET  /health           - Health check
  - GET  /version          - Server version info

Example usage:
  mis-sql-server                              # Start on localhost:8080
  mis-sql-server --schema office --port 3000

  curl -X POST "http://localhost:8080/api/v1/convert?office_id=12" \
    --data-binary @"Yangon MIS Reports.xlsx"
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "MIS_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "MIS_PORT")]
    port: u16,

    /// Default built-in schema (branch, office)
    #[arg(short, long, env = "MIS_SCHEMA")]
    schema: Option<String>,

    /// Schema YAML file (overrides --schema)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let schema = TableSchema::resolve(args.config.as_deref(), args.schema.as_deref())?;

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        schema,
    };

    run_api_server(config).await
}

//! CLI command handlers

pub mod commands;

pub use commands::{convert, inspect, render_statements, schema};

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to stderr, honouring `RUST_LOG` when set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "mis_sql=debug" } else { "mis_sql=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

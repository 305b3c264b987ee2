use clap::{Parser, Subcommand};
use colored::Colorize;
use mis_sql::cli;
use mis_sql::error::MisResult;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mis-sql")]
#[command(about = "Convert MIS report spreadsheets into SQL INSERT statements.")]
#[command(long_about = "MIS SQL - MIS report workbook to SQL converter

Reads every sheet of a workbook, picks out the branch name and report month
from the header rows, extracts the report table, and prints one INSERT
statement per recognized sheet. Sheets that are not MIS reports are skipped.

COMMANDS:
  convert   - Generate INSERT statements from a workbook
  inspect   - Preview the metadata and rows that would be extracted
  schema    - Show the active table schema and column layout as YAML

SCHEMAS:
  branch    - report_month + branch_name columns (default)
  office    - office_id + created_by columns, with this_month

EXAMPLES:
  mis-sql convert \"Yangon MIS Reports.xlsx\"
  mis-sql convert reports.xlsx --schema office --office-id 12 -o reports.sql
  mis-sql schema --schema office -o my_schema.yaml
  mis-sql convert reports.xlsx --config my_schema.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Generate one INSERT statement per MIS report sheet.

Statements are printed to stdout (each preceded by a '-- Sheet: <name>'
comment) or written to --output. Progress messages go to stderr.

The office schema needs --office-id (or MIS_OFFICE_ID).")]
    /// Generate SQL INSERT statements from a workbook
    Convert {
        /// Path to the workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
        input: PathBuf,

        /// Built-in schema to target (branch, office)
        #[arg(short, long, env = "MIS_SCHEMA")]
        schema: Option<String>,

        /// Schema YAML file (overrides --schema)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Office ID written to every row (office schema)
        #[arg(long, env = "MIS_OFFICE_ID")]
        office_id: Option<String>,

        /// Write the SQL script to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Preview extracted metadata and rows without generating SQL
    Inspect {
        /// Path to the workbook
        input: PathBuf,

        /// Built-in schema whose layout is used (branch, office)
        #[arg(short, long, env = "MIS_SCHEMA")]
        schema: Option<String>,

        /// Schema YAML file (overrides --schema)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the active schema as YAML
    Schema {
        /// Built-in schema to show (branch, office)
        #[arg(short, long, env = "MIS_SCHEMA")]
        schema: Option<String>,

        /// Schema YAML file to validate and show
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save the schema to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run(command: Commands) -> MisResult<()> {
    match command {
        Commands::Convert {
            input,
            schema,
            config,
            office_id,
            output,
            verbose,
        } => {
            cli::init_tracing(verbose);
            cli::convert(input, schema, config, office_id, output, verbose)
        }

        Commands::Inspect {
            input,
            schema,
            config,
            verbose,
        } => {
            cli::init_tracing(verbose);
            cli::inspect(input, schema, config)
        }

        Commands::Schema {
            schema,
            config,
            output,
        } => {
            cli::init_tracing(false);
            cli::schema(schema, config, output)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "conversion failed");
            eprintln!("{} {}", "❌".red(), e.user_message().red());
            ExitCode::FAILURE
        }
    }
}

use crate::convert::{convert_path, inspect_workbook};
use crate::error::{MisError, MisResult};
use crate::excel::ExcelImporter;
use crate::schema::TableSchema;
use crate::types::{format_number, SheetResult, SheetSql};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Join statements into one SQL script, each preceded by its sheet name
pub fn render_statements(results: &[SheetSql]) -> String {
    results
        .iter()
        .map(|r| format!("-- Sheet: {}\n{}\n", r.sheet_name, r.sql))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    schema: Option<String>,
    config: Option<PathBuf>,
    office_id: Option<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> MisResult<()> {
    let schema = TableSchema::resolve(config.as_deref(), schema.as_deref())?;

    eprintln!("{}", "🔥 MIS SQL - Converting workbook".bold().green());
    eprintln!("   File:  {}", input.display());
    eprintln!("   Table: {}", schema.table.bright_blue());
    if verbose {
        eprintln!("   Columns: {}", schema.column_list().cyan());
    }
    eprintln!();

    let results = convert_path(&input, &schema, office_id.as_deref())?;

    if results.is_empty() {
        eprintln!(
            "{}",
            "⚠️  No MIS report sheets with data rows were found".yellow()
        );
        return Ok(());
    }

    let script = render_statements(&results);
    match output {
        Some(path) => {
            write_output(&path, &script)?;
            eprintln!("{}", "✅ Conversion Complete!".bold().green());
            eprintln!("   SQL file: {}", path.display());
        }
        None => {
            print!("{}", script);
            eprintln!("{}", "✅ Conversion Complete!".bold().green());
        }
    }

    for r in &results {
        eprintln!("   📊 Sheet: {}", r.sheet_name.bright_blue());
    }
    eprintln!("   {} statement(s) generated", results.len());

    Ok(())
}

/// Execute the inspect command - preview what would be extracted
pub fn inspect(input: PathBuf, schema: Option<String>, config: Option<PathBuf>) -> MisResult<()> {
    let schema = TableSchema::resolve(config.as_deref(), schema.as_deref())?;

    println!("{}", "🔍 MIS SQL - Inspect".bold().green());
    println!("   File: {}\n", input.display());

    let workbook = ExcelImporter::new(&input).import()?;
    let results = inspect_workbook(&workbook, &schema);

    let skipped = workbook.sheets.len() - results.len();
    for result in &results {
        print_sheet(result);
    }

    println!(
        "   {} recognized, {} skipped",
        results.len().to_string().bold().green(),
        skipped.to_string().yellow()
    );
    Ok(())
}

fn print_sheet(result: &SheetResult) {
    println!("   📊 Sheet: {}", result.sheet_name.bright_blue().bold());
    println!("      Branch:       {}", result.metadata.branch_name);
    println!("      Report month: {}", result.metadata.report_month);
    println!("      Rows:         {}", result.rows.len());
    for row in &result.rows {
        let mut line = format!(
            "      {:<4} {:<30} {:<6} {:<6} {:>12} {:>12} {:>12}",
            row.no,
            row.particular,
            row.reference,
            row.units,
            format_number(row.previous_month),
            format_number(row.increased),
            format_number(row.decreased),
        );
        if let Some(this_month) = row.this_month {
            line.push_str(&format!(" {:>12}", format_number(this_month)));
        }
        println!("{}", line);
    }
    println!();
}

/// Execute the schema command - print or save the active schema as YAML
pub fn schema(
    schema: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> MisResult<()> {
    let schema = TableSchema::resolve(config.as_deref(), schema.as_deref())?;
    match output {
        Some(path) => {
            write_schema(&schema, &path)?;
            eprintln!("{}", "✅ Schema written".bold().green());
            eprintln!("   File: {}", path.display());
        }
        None => print!("{}", schema.to_yaml()?),
    }
    Ok(())
}

/// Write the active schema to a file as a starting point for customization
pub fn write_schema(schema: &TableSchema, path: &Path) -> MisResult<()> {
    write_output(path, &schema.to_yaml()?)
}

fn write_output(path: &Path, content: &str) -> MisResult<()> {
    fs::write(path, content)
        .map_err(|e| MisError::Output(format!("Failed to write {}: {}", path.display(), e)))
}

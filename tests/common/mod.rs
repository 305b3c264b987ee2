//! Workbook fixtures for integration tests

#![allow(dead_code)] // each test binary uses a different subset

use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// A cell written into a fixture sheet
#[derive(Clone, Copy)]
pub enum Fx<'a> {
    Blank,
    Text(&'a str),
    Num(f64),
    /// A serial number formatted as a date, read back as a date cell
    Date(f64),
}

pub type FixtureRow<'a> = Vec<Fx<'a>>;

/// Build an .xlsx workbook in memory from `(sheet name, rows)` pairs
pub fn workbook_bytes(sheets: &[(&str, Vec<FixtureRow>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Fx::Blank => {}
                    Fx::Text(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Fx::Num(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Fx::Date(n) => {
                        worksheet
                            .write_number_with_format(r, c, *n, &date_format)
                            .unwrap();
                    }
                }
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[(&str, Vec<FixtureRow>)]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, workbook_bytes(sheets)).unwrap();
    path
}

pub fn header_row() -> FixtureRow<'static> {
    vec![
        Fx::Text("No"),
        Fx::Text("Particular"),
        Fx::Blank,
        Fx::Blank,
        Fx::Blank,
        Fx::Text("Ref:"),
        Fx::Text("Unit"),
        Fx::Text("Previous Month"),
        Fx::Text("Increased"),
        Fx::Text("Decreased"),
    ]
}

/// Body row in the default layout
pub fn body_row<'a>(
    no: &'a str,
    particular: &'a str,
    reference: &'a str,
    units: &'a str,
    qty: [f64; 3],
) -> FixtureRow<'a> {
    let text = |s: &'a str| if s.is_empty() { Fx::Blank } else { Fx::Text(s) };
    vec![
        text(no),
        text(particular),
        Fx::Blank,
        Fx::Blank,
        Fx::Blank,
        text(reference),
        text(units),
        Fx::Num(qty[0]),
        Fx::Num(qty[1]),
        Fx::Num(qty[2]),
    ]
}

/// A complete MIS report sheet: branch marker, report month, header, body
pub fn mis_sheet<'a>(
    branch_cell: &'a str,
    month: Fx<'a>,
    body: Vec<FixtureRow<'a>>,
) -> Vec<FixtureRow<'a>> {
    let mut rows = vec![
        vec![Fx::Text("Monthly MIS Report")],
        vec![Fx::Text(branch_cell)],
        vec![Fx::Text("Report Month"), month],
        vec![],
        header_row(),
    ];
    rows.extend(body);
    rows
}

/// The single-row report used throughout the end-to-end tests
pub fn savings_sheet() -> Vec<FixtureRow<'static>> {
    mis_sheet(
        "Township and Branch Name: Yangon Central",
        Fx::Num(45367.0),
        vec![body_row("1", "Savings", "R1", "Ks", [100.0, 10.0, 5.0])],
    )
}

pub const SAVINGS_SQL: &str = "INSERT INTO mis_reports (no, particular, ref, units, previous_month, during_month_increased, during_month_decreased, report_month, branch_name)\n\
VALUES\n\
('1', 'Savings', 'R1', 'Ks', 100, 10, 5, '2024-03-16', 'Yangon Central');";

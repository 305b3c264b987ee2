use serde::Serialize;

//==============================================================================
// Sheet input
//==============================================================================

/// A single grid position's value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// A number the workbook formats as a date (1900 date system serial)
    DateSerial(f64),
}

impl Cell {
    /// Empty cells and whitespace-only text count as blank
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::DateSerial(_) => false,
        }
    }

    /// Display text of the cell, as a spreadsheet user would read it
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) | Cell::DateSerial(n) => format_number(*n),
        }
    }

    /// Trimmed, lower-cased text used for marker and keyword comparisons
    pub fn normalized(&self) -> String {
        self.text().trim().to_lowercase()
    }

    /// Numeric value of the cell; absent or non-numeric content reads as 0
    pub fn number_or_zero(&self) -> f64 {
        let value = match self {
            Cell::Empty => 0.0,
            Cell::Number(n) | Cell::DateSerial(n) => *n,
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(0.0)
                }
            }
        };

        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Shortest decimal rendering of a finite number (`100`, `2.5`, never `-0`)
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

/// One sheet's cells, indexed by absolute row and column (A1 = `(0, 0)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, col)`; ragged or missing positions read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// A workbook reduced to its named grids, in workbook order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<NamedSheet>,
}

#[derive(Debug, Clone)]
pub struct NamedSheet {
    pub name: String,
    pub grid: SheetGrid,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn grid(&self, sheet_name: &str) -> Option<&SheetGrid> {
        self.sheets
            .iter()
            .find(|s| s.name == sheet_name)
            .map(|s| &s.grid)
    }
}

//==============================================================================
// Extraction output
//==============================================================================

/// Branch and reporting period found in a sheet's free-form header rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMetadata {
    pub branch_name: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub report_month: String,
}

/// One retained line of the report body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRow {
    pub no: String,
    pub particular: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub units: String,
    pub previous_month: f64,
    pub increased: f64,
    pub decreased: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub this_month: Option<f64>,
}

/// Everything extracted from one recognized sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetResult {
    pub sheet_name: String,
    pub metadata: HeaderMetadata,
    pub rows: Vec<DataRow>,
}

/// A generated statement, ready to copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSql {
    pub sheet_name: String,
    pub sql: String,
}

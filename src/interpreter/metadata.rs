//! Header metadata embedded in the free-form rows above the report table

use super::dates::{iso_date, parse_date_text, serial_to_date};
use crate::types::{Cell, HeaderMetadata, SheetGrid};

/// Marker phrase of the cell holding `"Township and Branch Name: <name>"`
pub const BRANCH_MARKER: &str = "township and branch name";

/// Marker phrase of the cell whose right-hand neighbour holds the report date
pub const REPORT_MONTH_MARKER: &str = "report month";

/// Branch name used when the marker cell carries no value after a colon
pub const UNKNOWN_BRANCH: &str = "N/A";

/// Scan every row for the branch and report-month markers.
///
/// The whole grid is scanned because report variants place these fields on
/// different rows. When a marker appears more than once, the last occurrence
/// that yields a value wins. Returns `None` unless both fields resolve.
pub fn scan_metadata(grid: &SheetGrid) -> Option<HeaderMetadata> {
    let mut branch_name = String::new();
    let mut report_month = String::new();

    for row in grid.rows() {
        if let Some(cell) = find_marker(row, BRANCH_MARKER) {
            branch_name = branch_from_marker(&cell.text());
        }

        if let Some(col) = row.iter().position(|c| is_marker(c, REPORT_MONTH_MARKER)) {
            if let Some(month) = row.get(col + 1).and_then(report_month_from_cell) {
                report_month = month;
            }
        }
    }

    if branch_name.is_empty() || report_month.is_empty() {
        return None;
    }

    Some(HeaderMetadata {
        branch_name,
        report_month,
    })
}

fn is_marker(cell: &Cell, marker: &str) -> bool {
    match cell {
        Cell::Text(s) => s.to_lowercase().contains(marker),
        _ => false,
    }
}

fn find_marker<'a>(row: &'a [Cell], marker: &str) -> Option<&'a Cell> {
    row.iter().find(|c| is_marker(c, marker))
}

/// Text after the first `:`, trimmed, or [`UNKNOWN_BRANCH`]
fn branch_from_marker(text: &str) -> String {
    match text.split_once(':') {
        Some((_, name)) if !name.trim().is_empty() => name.trim().to_string(),
        _ => UNKNOWN_BRANCH.to_string(),
    }
}

fn report_month_from_cell(cell: &Cell) -> Option<String> {
    let date = match cell {
        Cell::Empty => None,
        Cell::Number(serial) | Cell::DateSerial(serial) => serial_to_date(*serial),
        Cell::Text(s) => parse_date_text(s),
    }?;
    Some(iso_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_scan_metadata_with_serial_date() {
        let grid = SheetGrid::new(vec![
            vec![text("Township and Branch Name: Yangon Central")],
            vec![text("Report Month"), Cell::DateSerial(45366.0)],
        ]);
        let meta = scan_metadata(&grid).unwrap();
        assert_eq!(meta.branch_name, "Yangon Central");
        assert_eq!(meta.report_month, "2024-03-15");
    }

    #[test]
    fn test_scan_metadata_marker_is_case_insensitive_substring() {
        let grid = SheetGrid::new(vec![
            vec![Cell::Empty, text("  TOWNSHIP AND BRANCH NAME :Mandalay ")],
            vec![Cell::Empty, Cell::Empty, text("for report month of"), text("2024-02-01")],
        ]);
        let meta = scan_metadata(&grid).unwrap();
        assert_eq!(meta.branch_name, "Mandalay");
        assert_eq!(meta.report_month, "2024-02-01");
    }

    #[test]
    fn test_branch_without_colon_is_unknown() {
        let grid = SheetGrid::new(vec![
            vec![text("Township and Branch Name")],
            vec![text("Report Month"), Cell::Number(45366.0)],
        ]);
        assert_eq!(scan_metadata(&grid).unwrap().branch_name, UNKNOWN_BRANCH);
    }

    #[test]
    fn test_branch_keeps_text_after_first_colon() {
        assert_eq!(branch_from_marker("Township and Branch Name: A: B"), "A: B");
        assert_eq!(branch_from_marker("Township and Branch Name:   "), UNKNOWN_BRANCH);
    }

    #[test]
    fn test_missing_branch_marker_skips() {
        let grid = SheetGrid::new(vec![vec![text("Report Month"), Cell::Number(45366.0)]]);
        assert_eq!(scan_metadata(&grid), None);
    }

    #[test]
    fn test_missing_report_month_skips() {
        let grid = SheetGrid::new(vec![vec![text("Township and Branch Name: X")]]);
        assert_eq!(scan_metadata(&grid), None);
    }

    #[test]
    fn test_report_month_without_value_skips() {
        let grid = SheetGrid::new(vec![
            vec![text("Township and Branch Name: X")],
            vec![text("Report Month")],
        ]);
        assert_eq!(scan_metadata(&grid), None);
    }

    #[test]
    fn test_unparseable_report_month_skips() {
        let grid = SheetGrid::new(vec![
            vec![text("Township and Branch Name: X")],
            vec![text("Report Month"), text("last month")],
        ]);
        assert_eq!(scan_metadata(&grid), None);
    }

    #[test]
    fn test_numeric_marker_lookalike_is_ignored() {
        let grid = SheetGrid::new(vec![
            vec![Cell::Number(1.0), text("Township and Branch Name: X")],
            vec![Cell::Number(45366.0), text("Report Month"), Cell::Number(45292.0)],
        ]);
        assert_eq!(scan_metadata(&grid).unwrap().report_month, "2024-01-01");
    }

    #[test]
    fn test_last_resolving_marker_wins() {
        let grid = SheetGrid::new(vec![
            vec![text("Township and Branch Name: First")],
            vec![text("Report Month"), Cell::Number(45292.0)],
            vec![text("Township and Branch Name: Second")],
            vec![text("Report Month")],
        ]);
        let meta = scan_metadata(&grid).unwrap();
        assert_eq!(meta.branch_name, "Second");
        assert_eq!(meta.report_month, "2024-01-01");
    }
}

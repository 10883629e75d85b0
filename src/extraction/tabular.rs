// CSV and spreadsheet extraction rendered as aligned text tables

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{ExtractionError, ExtractionResult};

const MISSING: &str = "NaN";
const COLUMN_GAP: &str = "  ";

/// Read a UTF-8 CSV file whose first row holds the column names.
pub fn extract_csv(path: &Path) -> ExtractionResult {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ExtractionError::Csv(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(ExtractionError::Csv("No columns to parse from file".to_string()));
    }
    let headers = name_columns(headers);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ExtractionError::Csv(e.to_string()))?;
        if record.len() > headers.len() {
            return Err(ExtractionError::Csv(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                index + 2,
                record.len()
            )));
        }

        let mut row: Vec<String> = record
            .iter()
            .map(|field| if field.is_empty() { MISSING.to_string() } else { field.to_string() })
            .collect();
        row.resize(headers.len(), MISSING.to_string());
        rows.push(row);
    }

    Ok(render_table(&headers, &rows))
}

/// Read the first worksheet of an `.xlsx`/`.xls` workbook.
pub fn extract_spreadsheet(path: &Path) -> ExtractionResult {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractionError::Spreadsheet("Workbook has no worksheets".to_string()))?
        .map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;

    range_to_table(&range)
}

fn range_to_table(range: &Range<Data>) -> ExtractionResult {
    let mut rows_iter = range.rows();
    let header_row = rows_iter
        .next()
        .ok_or_else(|| ExtractionError::Spreadsheet("No columns to parse from file".to_string()))?;

    let headers = name_columns(
        header_row
            .iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                other => cell_text(other),
            })
            .collect(),
    );

    let rows: Vec<Vec<String>> = rows_iter
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(render_table(&headers, &rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => MISSING.to_string(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Blank column names become `Unnamed: <index>`.
fn name_columns(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .enumerate()
        .map(|(i, h)| if h.trim().is_empty() { format!("Unnamed: {}", i) } else { h })
        .collect()
}

/// Right-align every column to its widest cell; no row index column.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(headers));
    for row in rows {
        lines.push(format_line(row));
    }
    lines.join("\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    /// Write a single-sheet workbook: a header row, then (label, amount) rows.
    pub(crate) fn write_xlsx(path: &Path, headers: &[&str], rows: &[(&str, f64)]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (i, (label, amount)) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, *label).unwrap();
            sheet.write_number(row, 1, *amount).unwrap();
        }
        workbook.save(path).unwrap();
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_table_alignment() {
        let table = render_table(
            &strings(&["item", "amount"]),
            &[strings(&["Revenue", "100"]), strings(&["Cost", "40"])],
        );
        assert_eq!(
            table,
            "   item  amount\nRevenue     100\n   Cost      40"
        );
    }

    #[test]
    fn test_csv_extraction() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.csv");
        std::fs::write(&path, "item,amount,note\nRevenue,100,\nCost,40\n").unwrap();

        let text = extract_csv(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("item") && lines[0].contains("amount"));
        assert!(lines[1].contains("Revenue") && lines[1].contains("100"));
        // short rows and blank fields are padded
        assert!(lines[2].ends_with("NaN"));
        assert!(lines[1].ends_with("NaN"));
    }

    #[test]
    fn test_csv_errors_are_readable() {
        let dir = tempfile::TempDir::new().unwrap();

        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "").unwrap();
        let err = extract_csv(&empty).unwrap_err();
        assert_eq!(err.to_string(), "Error reading CSV: No columns to parse from file");

        let ragged = dir.path().join("ragged.csv");
        std::fs::write(&ragged, "a,b\n1,2,3\n").unwrap();
        let err = extract_csv(&ragged).unwrap_err();
        assert_eq!(err.to_string(), "Error reading CSV: Expected 2 fields in line 2, saw 3");

        let binary = dir.path().join("binary.csv");
        std::fs::write(&binary, [b'a', b',', b'b', b'\n', 0xff, 0xfe, b',', b'1', b'\n']).unwrap();
        assert!(matches!(extract_csv(&binary), Err(ExtractionError::Csv(_))));
    }

    #[test]
    fn test_range_to_table() {
        let mut range: Range<Data> = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("Quarter".to_string()));
        range.set_value((0, 1), Data::String("Revenue".to_string()));
        range.set_value((1, 0), Data::String("Q1".to_string()));
        range.set_value((1, 1), Data::Float(100.0));
        range.set_value((1, 2), Data::Bool(true));
        range.set_value((3, 0), Data::String("Q2".to_string()));
        range.set_value((3, 1), Data::Float(12.5));

        let text = range_to_table(&range).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // the blank third row is dropped
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Quarter") && lines[0].contains("Unnamed: 2"));
        assert!(lines[1].contains("Q1") && lines[1].contains("100") && lines[1].contains("True"));
        assert!(!lines[1].contains("100.0"));
        assert!(lines[2].contains("12.5") && lines[2].ends_with("NaN"));
    }

    #[test]
    fn test_spreadsheet_extraction() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quarters.xlsx");
        write_xlsx(&path, &["Quarter", "Revenue"], &[("Q1", 100.0), ("Q2", 12.5)]);

        let text = extract_spreadsheet(&path).unwrap();
        assert_eq!(text, "Quarter  Revenue\n     Q1      100\n     Q2     12.5");
    }

    #[test]
    fn test_corrupt_workbook_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"definitely not a workbook").unwrap();

        let err = extract_spreadsheet(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Spreadsheet(_)));
        assert!(err.to_string().starts_with("Error reading Excel file"));
    }
}

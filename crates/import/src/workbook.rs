//! Decoded spreadsheet contents.
//!
//! Cells are plain text; decoding the file format happens upstream.

use std::collections::HashMap;

use crate::error::ImportError;

/// One sheet: a name and its rows of cell text. The first row is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// The header row, if the sheet has any rows.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// All sheets of a decoded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Finds a sheet by name, trimmed on both sides and ignoring case.
    pub fn find_sheet(&self, name: &str) -> Result<&Sheet, ImportError> {
        let wanted = name.trim();
        self.sheets
            .iter()
            .find(|sheet| sheet.name.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ImportError::SheetNotFound(wanted.to_owned()))
    }
}

/// Column position of each wanted header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Maps each of `headers` to the first column of `header_row` whose
    /// trimmed text equals it, ignoring case. Headers not found are absent.
    pub fn locate(header_row: &[String], headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .filter_map(|&header| {
                header_row
                    .iter()
                    .position(|cell| cell.trim().eq_ignore_ascii_case(header))
                    .map(|column| (header.to_owned(), column))
            })
            .collect();
        Self { columns }
    }

    /// Column of `header`, if it was found.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.columns.get(header).copied()
    }

    /// Text of `header`'s cell in `row`; `None` when the header or cell is missing.
    pub fn cell<'r>(&self, row: &'r [String], header: &str) -> Option<&'r str> {
        self.column(header)
            .and_then(|column| row.get(column))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("sheet1")]
    #[case("  SHEET1 ")]
    #[case("Sheet1")]
    fn find_sheet_ignores_case_and_padding(#[case] name: &str) {
        let workbook = Workbook::new(vec![
            Sheet::new("summary", vec![]),
            Sheet::new(" Sheet1", vec![]),
        ]);
        assert_eq!(workbook.find_sheet(name).unwrap().name, " Sheet1");
    }

    #[test]
    fn find_sheet_miss() {
        let workbook = Workbook::new(vec![Sheet::new("summary", vec![])]);
        assert_eq!(
            workbook.find_sheet(" sheet1 "),
            Err(ImportError::SheetNotFound("sheet1".into()))
        );
    }

    #[test]
    fn locate_matches_first_column() {
        let header = row(&[" name ", "AGE", "Name", "notes"]);
        let index = HeaderIndex::locate(&header, &["Name", "Age", "Gender"]);
        assert_eq!(index.column("Name"), Some(0));
        assert_eq!(index.column("Age"), Some(1));
        assert_eq!(index.column("Gender"), None);
    }

    #[test]
    fn cell_handles_short_rows() {
        let index = HeaderIndex::locate(&row(&["Name", "Age"]), &["Name", "Age"]);
        let short = row(&["Alex"]);
        assert_eq!(index.cell(&short, "Name"), Some("Alex"));
        assert_eq!(index.cell(&short, "Age"), None);
    }

    #[test]
    fn data_rows_skip_header() {
        let sheet = Sheet::new("s", vec![row(&["Name"]), row(&["Alex"])]);
        assert_eq!(sheet.header(), Some(row(&["Name"]).as_slice()));
        assert_eq!(sheet.data_rows(), &[row(&["Alex"])]);
        assert!(Sheet::default().data_rows().is_empty());
    }
}

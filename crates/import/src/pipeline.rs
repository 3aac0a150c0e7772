//! Row-by-row import of person records.

use tranzo_validator::foundation::{ErrorMap, ObjectId, Validate};

use crate::details::Details;
use crate::error::ImportError;
use crate::store::RecordStore;
use crate::workbook::{HeaderIndex, Sheet, Workbook};

/// Name of the sheet holding person records.
pub const DETAILS_SHEET: &str = "sheet1";

/// Header cells read from the first row, in column-lookup order.
pub const HEADERS: [&str; 3] = ["Name", "Age", "Gender"];

const NAME: &str = HEADERS[0];
const AGE: &str = HEADERS[1];
const GENDER: &str = HEADERS[2];

/// A data row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// Index among the data rows, starting at 0 after the header.
    pub row: usize,
    pub errors: ErrorMap,
}

/// Outcome of importing one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records accepted by the store.
    pub imported: usize,
    pub rejected: Vec<RowRejection>,
    /// Valid records the store refused.
    pub failed: usize,
}

/// Validates sheet rows and hands valid records to a [`RecordStore`].
#[derive(Debug)]
pub struct Importer<S> {
    store: S,
}

impl<S: RecordStore> Importer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Imports the [`DETAILS_SHEET`] of `workbook`.
    pub fn import_workbook(&mut self, workbook: &Workbook) -> Result<ImportSummary, ImportError> {
        let sheet = workbook.find_sheet(DETAILS_SHEET)?;
        self.import(sheet)
    }

    /// Imports every data row of `sheet`.
    ///
    /// Rows without cells are skipped. Rows that fail validation are listed in
    /// the summary and the import carries on; so does a store failure.
    ///
    /// # Errors
    ///
    /// [`ImportError::MissingColumn`] when the header row has no `Name` column.
    pub fn import(&mut self, sheet: &Sheet) -> Result<ImportSummary, ImportError> {
        let mut summary = ImportSummary::default();
        let Some(header) = sheet.header() else {
            return Ok(summary);
        };

        let index = HeaderIndex::locate(header, &HEADERS);
        if index.column(NAME).is_none() {
            return Err(ImportError::MissingColumn(NAME));
        }

        for (row, cells) in sheet.data_rows().iter().enumerate() {
            if cells.is_empty() {
                continue;
            }

            let mut details = read_details(&index, cells);
            let (has_errors, errors) = details.validate();
            if has_errors {
                tracing::warn!(row, ?errors, "row rejected");
                summary.rejected.push(RowRejection { row, errors });
                continue;
            }

            details.id = ObjectId::generate();
            match self.store.insert(&details) {
                Ok(()) => summary.imported += 1,
                Err(error) => {
                    tracing::error!(row, name = %details.name, %error, "failed to store record");
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            sheet = %sheet.name,
            imported = summary.imported,
            rejected = summary.rejected.len(),
            failed = summary.failed,
            "import finished"
        );
        Ok(summary)
    }
}

fn read_details(index: &HeaderIndex, cells: &[String]) -> Details {
    let cell = |header: &str| index.cell(cells, header).unwrap_or_default();
    Details::new(cell(NAME).trim(), cell(AGE), cell(GENDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_sheet_imports_nothing() {
        let mut importer = Importer::new(MemoryStore::default());
        let summary = importer.import(&Sheet::new("sheet1", vec![])).unwrap();
        assert_eq!(summary, ImportSummary::default());
    }

    #[test]
    fn missing_name_column_aborts() {
        let sheet = Sheet::new("sheet1", vec![row(&["Age", "Gender"]), row(&["30", "M"])]);
        let mut importer = Importer::new(MemoryStore::default());
        assert_eq!(importer.import(&sheet), Err(ImportError::MissingColumn("Name")));
        assert!(importer.store().is_empty());
    }

    #[test]
    fn name_is_trimmed_other_cells_are_raw() {
        let sheet = Sheet::new(
            "sheet1",
            vec![row(&["Gender", "Name", "Age"]), row(&[" F ", "  Sam ", " 41"])],
        );
        let mut importer = Importer::new(MemoryStore::default());
        importer.import(&sheet).unwrap();

        let stored = &importer.store().records()[0];
        assert_eq!(stored.name, "Sam");
        assert_eq!(stored.age, " 41");
        assert_eq!(stored.gender, " F ");
        assert!(!stored.id.is_nil());
    }
}

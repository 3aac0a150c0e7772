//! Importing decoded sheets end to end.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tranzo_import::{
    Details, DETAILS_SHEET, ImportError, Importer, MemoryStore, RecordStore, RowRejection, Sheet,
    StoreError, Workbook,
};
use tranzo_validator::foundation::{ErrorMap, Validate};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

fn name_missing() -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.insert("name".into(), "Name is missing".into());
    errors
}

#[fixture]
fn people() -> Sheet {
    Sheet::new(
        "Sheet1",
        vec![
            row(&["Name", "Age", "Gender"]),
            row(&["Alex", "30", "M"]),
            row(&["", "30", "M"]),
            vec![],
            row(&["   ", "52", "F"]),
            row(&["Priya", "27"]),
        ],
    )
}

#[rstest]
#[case(Details::new("", "30", "M"), true, name_missing())]
#[case(Details::new("Alex", "30", "M"), false, ErrorMap::new())]
fn details_validation(
    #[case] details: Details,
    #[case] has_errors: bool,
    #[case] errors: ErrorMap,
) {
    assert_eq!(details.validate(), (has_errors, errors));
}

#[rstest]
fn imports_valid_rows_and_reports_blank_names(people: Sheet) {
    let mut importer = Importer::new(MemoryStore::default());
    let summary = importer.import(&people).unwrap();

    assert_eq!(summary.imported, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        summary.rejected,
        vec![
            RowRejection { row: 1, errors: name_missing() },
            RowRejection { row: 3, errors: name_missing() },
        ]
    );

    let store = importer.into_store();
    let names: Vec<_> = store.records().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Alex", "Priya"]);
    assert_eq!(store.records()[1].gender, "");
    assert_ne!(store.records()[0].id, store.records()[1].id);
    assert!(store.records().iter().all(|d| !d.id.is_nil()));
}

#[rstest]
fn imports_named_sheet_from_workbook(people: Sheet) {
    let workbook = Workbook::new(vec![Sheet::new("cover", vec![]), people]);
    let mut importer = Importer::new(MemoryStore::default());
    let summary = importer.import_workbook(&workbook).unwrap();
    assert_eq!(summary.imported, 2);
}

#[test]
fn workbook_without_details_sheet() {
    let workbook = Workbook::new(vec![Sheet::new("cover", vec![])]);
    let mut importer = Importer::new(MemoryStore::default());
    assert_eq!(
        importer.import_workbook(&workbook),
        Err(ImportError::SheetNotFound(DETAILS_SHEET.into()))
    );
}

/// Refuses every record.
#[derive(Default)]
struct FailingStore {
    attempts: usize,
}

impl RecordStore for FailingStore {
    fn insert(&mut self, _details: &Details) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(StoreError::Backend("disk full".into()))
    }
}

#[rstest]
fn store_failures_do_not_stop_import(people: Sheet) {
    let mut store = FailingStore::default();
    let summary = Importer::new(&mut store).import(&people).unwrap();

    assert_eq!(summary.imported, 0);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.rejected.len(), 2);
    assert_eq!(store.attempts, 2);
}

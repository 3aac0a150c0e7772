//! # tranzo-import
//!
//! Imports person records from an already decoded spreadsheet. Each data row
//! becomes a [`Details`] record, is validated with `tranzo-validator`, gets a
//! fresh [`ObjectId`](tranzo_validator::foundation::ObjectId) and is handed to
//! a [`RecordStore`].
//!
//! ```
//! use tranzo_import::{Importer, MemoryStore, Sheet};
//!
//! let sheet = Sheet::new("sheet1", vec![
//!     vec!["Name".into(), "Age".into(), "Gender".into()],
//!     vec!["Alex".into(), "30".into(), "M".into()],
//!     vec!["".into(), "41".into(), "F".into()],
//! ]);
//!
//! let mut importer = Importer::new(MemoryStore::default());
//! let summary = importer.import(&sheet).unwrap();
//! assert_eq!(summary.imported, 1);
//! assert_eq!(summary.rejected[0].errors["name"], "Name is missing");
//! ```

mod details;
mod error;
mod pipeline;
mod store;
mod workbook;

pub use details::Details;
pub use error::{ImportError, StoreError};
pub use pipeline::{DETAILS_SHEET, HEADERS, ImportSummary, Importer, RowRejection};
pub use store::{MemoryStore, RecordStore};
pub use workbook::{HeaderIndex, Sheet, Workbook};

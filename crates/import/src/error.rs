//! Import and storage errors.

/// Reasons an import cannot start.
///
/// Per-row problems are not errors: invalid rows are reported in the
/// [`ImportSummary`](crate::ImportSummary) and store failures are counted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImportError {
    /// No sheet with that name (compared trimmed, ignoring case).
    #[error("sheet `{0}` not found")]
    SheetNotFound(String),

    /// The header row lacks a column the import cannot do without.
    #[error("required column `{0}` is missing from the header row")]
    MissingColumn(&'static str),
}

/// A record store refused a record.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A record with the same id is already stored.
    #[error("record {0} already exists")]
    Duplicate(String),

    /// Backend-specific failure.
    #[error("store backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ImportError::MissingColumn("Name").to_string(),
            "required column `Name` is missing from the header row"
        );
        assert_eq!(
            ImportError::SheetNotFound("sheet1".into()).to_string(),
            "sheet `sheet1` not found"
        );
        let backend = StoreError::Backend("connection reset".into());
        assert_eq!(backend.to_string(), "store backend failed: connection reset");
    }
}

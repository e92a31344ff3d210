// ==========================================
// Shopfront - importer error types
// ==========================================
// Two families, per the import contract:
// - parse failures: the upload could not be tokenized as CSV at all
// - validation failures: rows parsed but fail the schema pass
// Either way the whole batch is rejected and the catalog stays untouched.
// ==========================================

use thiserror::Error;

/// Catalog importer error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== parse failures =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== validation failures =====
    #[error("missing or empty required field (row {row}, column {field})")]
    MissingOrEmptyField { row: usize, field: String },

    #[error("invalid price (row {row}): {value:?} is not a non-negative number")]
    InvalidPrice { row: usize, value: String },

    // ===== catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// True for schema-validation failures (rows were readable but invalid),
    /// false for parse-level failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ImportError::MissingOrEmptyField { .. } | ImportError::InvalidPrice { .. }
        )
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias used across the importer.
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ImportError::MissingOrEmptyField {
            row: 2,
            field: "price".to_string()
        }
        .is_validation());
        assert!(ImportError::InvalidPrice {
            row: 1,
            value: "abc".to_string()
        }
        .is_validation());
        assert!(!ImportError::CsvParseError("broken".to_string()).is_validation());
        assert!(!ImportError::FileNotFound("x.csv".to_string()).is_validation());
    }
}

// ==========================================
// Shopfront - API layer error types
// ==========================================
// Converts importer/state errors into messages the frontend can show.
// Every failure is terminal for the attempt; nothing is retried.
// ==========================================

use crate::i18n::t;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Message shown to the user (toast text). Import failures collapse to
    /// the two generic notifications the storefront displays; the precise
    /// row/column detail stays in `Display` and the logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Import(err) if err.is_validation() => t("import.invalid_rows"),
            ApiError::Import(_) => t("import.parse_error"),
            other => other.to_string(),
        }
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;

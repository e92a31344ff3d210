// ==========================================
// Shopfront - API layer
// ==========================================
// Business interfaces the app layer (and the optional Tauri shell) calls.
// ==========================================

pub mod catalog_api;
pub mod error;
pub mod payment_api;

// Re-export core types
pub use catalog_api::{CatalogApi, ImportOutcome, ImportRecord};
pub use error::{ApiError, ApiResult};
pub use payment_api::PaymentApi;

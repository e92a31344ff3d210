// ==========================================
// Shopfront - core library
// ==========================================
// Client-side storefront core: CSV catalog import with batch-atomic
// validation, an in-memory catalog with merge-by-id semantics, and the
// data behind a crypto checkout panel. No server, no persistence; the
// catalog resets to its seed list on every launch.
// ==========================================

// Initialize internationalization
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - record types
pub mod domain;

// Import layer - CSV parsing & validation
pub mod importer;

// Catalog layer - in-memory state container
pub mod catalog;

// Payment layer - checkout panel data
pub mod payment;

// Config layer - operator settings
pub mod config;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - business interfaces
pub mod api;

// Application layer - shared state & Tauri integration
pub mod app;

// ==========================================
// Re-export core types
// ==========================================

// Domain
pub use domain::{ImportBatch, ImportSummary, Product, RawProductRecord};

// Importer
pub use importer::{CatalogImporter, CatalogImporterImpl, ImportError, ImportResult};

// Catalog
pub use catalog::{Catalog, MergeOutcome};

// Payment
pub use payment::{CryptoAsset, PaymentDetails, WalletDirectory};

// Config
pub use config::AppConfig;

// API
pub use api::{ApiError, ApiResult, CatalogApi, ImportOutcome, PaymentApi};

// App
pub use app::AppState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Shopfront";

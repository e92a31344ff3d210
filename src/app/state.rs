// ==========================================
// Shopfront - application state
// ==========================================
// Owned by the application root. The catalog lives behind a Mutex only
// because a Tauri shell requires `Send + Sync` state; imports themselves
// are single-flight per user action.
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::catalog_api::CatalogApi;
use crate::api::payment_api::PaymentApi;
use crate::catalog::state::Catalog;
use crate::config::app_config::AppConfig;
use crate::importer::catalog_importer_impl::CatalogImporterImpl;

/// Application state: config plus the API instances a shell mounts.
pub struct AppState {
    pub config: AppConfig,
    pub catalog_api: Arc<CatalogApi>,
    pub payment_api: Arc<PaymentApi>,
}

impl AppState {
    /// State with the seeded catalog and the default import pipeline.
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, Catalog::seeded())
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> Self {
        let catalog = Arc::new(Mutex::new(catalog));
        let catalog_api = Arc::new(CatalogApi::new(
            Arc::clone(&catalog),
            Box::new(CatalogImporterImpl::default()),
        ));
        let payment_api = Arc::new(PaymentApi::new(&config));

        Self {
            config,
            catalog_api,
            payment_api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::load())
    }
}

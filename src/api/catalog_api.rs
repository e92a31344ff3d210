// ==========================================
// Shopfront - catalog API
// ==========================================
// The operations a frontend shell calls: import a CSV, list products,
// select a product, read the default offer. Owns the selection state and
// the per-session import history; the catalog itself is shared.
// ==========================================

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::state::{Catalog, MergeOutcome};
use crate::domain::product::{ImportBatch, Product};
use crate::i18n::t_with_args;
use crate::importer::catalog_importer_trait::CatalogImporter;

// ==========================================
// ImportOutcome - notification payload
// ==========================================
/// What the frontend shows after a successful import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch_id: String,
    pub imported: usize,
    pub replaced: usize,
    pub added: usize,
    /// Localized toast text ("import succeeded, N records").
    pub message: String,
    /// Id of the re-selected default offer, if the catalog is non-empty.
    pub default_offer_id: Option<String>,
}

/// One entry of the in-session import history (resets on restart, like the
/// catalog itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecord {
    pub batch_id: String,
    pub imported_at: DateTime<Utc>,
    pub imported: usize,
    pub replaced: usize,
    pub added: usize,
}

// ==========================================
// CatalogApi
// ==========================================
pub struct CatalogApi {
    catalog: Arc<Mutex<Catalog>>,
    importer: Box<dyn CatalogImporter>,
    selected_id: Mutex<Option<String>>,
    history: Mutex<Vec<ImportRecord>>,
}

impl CatalogApi {
    pub fn new(catalog: Arc<Mutex<Catalog>>, importer: Box<dyn CatalogImporter>) -> Self {
        let selected_id = catalog
            .lock()
            .ok()
            .and_then(|c| c.default_offer().map(|p| p.id.clone()));

        Self {
            catalog,
            importer,
            selected_id: Mutex::new(selected_id),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Import a CSV file and merge it into the catalog.
    ///
    /// One import per user action; on any error the catalog is untouched
    /// and the attempt is over (the user fixes the file and retries).
    pub async fn import_from_path<P: AsRef<Path> + Send>(
        &self,
        path: P,
    ) -> ApiResult<ImportOutcome> {
        let batch = self.importer.import_from_path(path.as_ref()).await.map_err(|e| {
            warn!(error = %e, "import failed");
            e
        })?;
        self.apply_batch(batch)
    }

    /// Import already-read file contents (the raw upload text).
    pub fn import_contents(&self, contents: &str) -> ApiResult<ImportOutcome> {
        let batch = self.importer.parse_contents(contents).map_err(|e| {
            warn!(error = %e, "import failed");
            e
        })?;
        self.apply_batch(batch)
    }

    fn apply_batch(&self, batch: ImportBatch) -> ApiResult<ImportOutcome> {
        let ImportBatch {
            batch_id,
            imported_at,
            summary,
            products,
        } = batch;

        let (outcome, default_offer_id) = {
            let mut catalog = self.lock_catalog()?;
            let outcome: MergeOutcome = catalog.merge(products);
            (outcome, catalog.default_offer().map(|p| p.id.clone()))
        };

        // Re-select the default offer after every merge
        *self.lock(&self.selected_id)? = default_offer_id.clone();

        self.lock(&self.history)?.push(ImportRecord {
            batch_id: batch_id.clone(),
            imported_at,
            imported: summary.imported,
            replaced: outcome.replaced,
            added: outcome.added,
        });

        info!(
            batch_id = %batch_id,
            imported = summary.imported,
            replaced = outcome.replaced,
            added = outcome.added,
            "import merged into catalog"
        );

        Ok(ImportOutcome {
            batch_id,
            imported: summary.imported,
            replaced: outcome.replaced,
            added: outcome.added,
            message: t_with_args("import.success", &[("count", &summary.imported.to_string())]),
            default_offer_id,
        })
    }

    pub fn list_products(&self) -> ApiResult<Vec<Product>> {
        Ok(self.lock_catalog()?.products().to_vec())
    }

    /// Select a product by id (the "Select" button on a product card).
    pub fn select_product(&self, id: &str) -> ApiResult<Product> {
        let product = self
            .lock_catalog()?
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))?;

        *self.lock(&self.selected_id)? = Some(product.id.clone());
        Ok(product)
    }

    /// The currently selected product, defaulting to the default offer.
    pub fn selected_product(&self) -> ApiResult<Option<Product>> {
        let catalog = self.lock_catalog()?;
        let selected = self.lock(&self.selected_id)?.clone();

        Ok(match selected {
            Some(id) => catalog.get(&id).cloned(),
            None => catalog.default_offer().cloned(),
        })
    }

    pub fn default_offer(&self) -> ApiResult<Option<Product>> {
        Ok(self.lock_catalog()?.default_offer().cloned())
    }

    pub fn import_history(&self) -> ApiResult<Vec<ImportRecord>> {
        Ok(self.lock(&self.history)?.clone())
    }

    fn lock_catalog(&self) -> ApiResult<std::sync::MutexGuard<'_, Catalog>> {
        self.lock(&self.catalog)
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<T>) -> ApiResult<std::sync::MutexGuard<'a, T>> {
        mutex
            .lock()
            .map_err(|e| ApiError::Internal(format!("state lock poisoned: {e}")))
    }
}

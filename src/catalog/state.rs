// ==========================================
// Shopfront - catalog state container
// ==========================================
// The single in-memory source of truth for products. Ordered, keyed by
// `Product::id`, mutated only through `merge`. Not persisted: it resets
// to the seed list on restart.
// ==========================================

use crate::domain::product::Product;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Counters returned by one merge, for the user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Existing entries replaced in place.
    pub replaced: usize,
    /// New entries appended at the end.
    pub added: usize,
}

/// Ordered product collection with merge-by-id semantics.
///
/// Merge ordering is deterministic: an imported id that already exists
/// replaces that entry at its original position; new ids append at the
/// end in import order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog pre-populated with the hardcoded seed list.
    pub fn seeded() -> Self {
        Self::new(super::seed::seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Merge an import batch into the catalog. Imported records win over
    /// existing ones with the same id; replacement is whole-record, never
    /// field-level.
    pub fn merge(&mut self, imported: Vec<Product>) -> MergeOutcome {
        let mut outcome = MergeOutcome {
            replaced: 0,
            added: 0,
        };

        for item in imported {
            match self.products.iter().position(|p| p.id == item.id) {
                Some(idx) => {
                    self.products[idx] = item;
                    outcome.replaced += 1;
                }
                None => {
                    self.products.push(item);
                    outcome.added += 1;
                }
            }
        }

        debug!(
            replaced = outcome.replaced,
            added = outcome.added,
            total = self.products.len(),
            "catalog merged"
        );
        outcome
    }

    /// The default "hero" offer: the first item whose name contains
    /// "ultimate" case-insensitively, falling back to the first item.
    pub fn default_offer(&self) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.is_hero_candidate())
            .or_else(|| self.products.first())
    }
}

// ==========================================
// Shopfront - product domain model
// ==========================================
// The catalog is keyed by `Product::id`; an import that carries an id
// already present replaces that record entirely (no field-level merge).
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Product - one catalog item
// ==========================================
// Written by the importer, read by the catalog/payment layers.
// Serde names follow the CSV/frontend column names (`price`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    // ===== dedup key =====
    pub id: String,

    // ===== display fields =====
    pub name: String,
    pub description: String,

    // ===== pricing (USD) =====
    #[serde(rename = "price")]
    pub price_usd: f64,

    // ===== optional presentation fields =====
    pub category: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    // ===== hero flag =====
    pub featured: bool,
}

impl Product {
    /// Whether this product qualifies as the default "hero" offer.
    ///
    /// The storefront highlights the first item whose name contains
    /// "ultimate", case-insensitively.
    pub fn is_hero_candidate(&self) -> bool {
        self.name.to_lowercase().contains("ultimate")
    }
}

// ==========================================
// RawProductRecord - untyped row, post-parse / pre-validate
// ==========================================
// One CSV data row after header keying and trimming, before the schema
// validation pass. All fields stay `Option<String>` so the validator can
// report exactly which column is missing or blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProductRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<String>,

    /// 1-based data row number (header excluded), for error reporting.
    pub row_number: usize,
}

// ==========================================
// ImportSummary / ImportBatch - one upload, one batch
// ==========================================

/// Per-batch counters surfaced in the user notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Non-blank data rows seen in the file.
    pub total_rows: usize,
    /// Products produced; equals `total_rows` because validation is all-or-nothing.
    pub imported: usize,
}

/// The validated result of parsing one uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,
    pub imported_at: DateTime<Utc>,
    pub summary: ImportSummary,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: "P1".to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            price_usd: 10.0,
            category: None,
            image_url: None,
            featured: false,
        }
    }

    #[test]
    fn test_hero_candidate_case_insensitive() {
        assert!(product("Ultimate Package").is_hero_candidate());
        assert!(product("the ULTIMATE deal").is_hero_candidate());
        assert!(!product("Pro Template Pack").is_hero_candidate());
    }

    #[test]
    fn test_product_serde_uses_frontend_names() {
        let json = serde_json::to_value(product("Pro")).unwrap();
        assert!(json.get("price").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("price_usd").is_none());
    }
}

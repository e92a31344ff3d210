// ==========================================
// Shopfront - seed catalog
// ==========================================
// The hardcoded list the catalog starts from on every launch. Imports
// overlay it; nothing is persisted between sessions.
// ==========================================

use crate::domain::product::Product;

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "ULT-250".to_string(),
            name: "Ultimate Package".to_string(),
            description: "All templates + source files + priority support".to_string(),
            price_usd: 250.0,
            category: Some("Bundle".to_string()),
            image_url: None,
            featured: true,
        },
        Product {
            id: "TPL-PRO".to_string(),
            name: "Pro Template Pack".to_string(),
            description: "Advanced layered design templates".to_string(),
            price_usd: 79.0,
            category: Some("Templates".to_string()),
            image_url: None,
            featured: false,
        },
        Product {
            id: "TPL-DELUXE".to_string(),
            name: "Deluxe Template Pack".to_string(),
            description: "Premium multi-layer design templates".to_string(),
            price_usd: 129.0,
            category: Some("Templates".to_string()),
            image_url: None,
            featured: false,
        },
    ]
}

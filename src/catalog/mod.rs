// ==========================================
// Shopfront - catalog layer
// ==========================================
// Explicit state container for the product list. Owned by the application
// root; components get read access, mutation happens only via `merge`.
// ==========================================

pub mod seed;
pub mod state;

// Re-export core types
pub use seed::seed_products;
pub use state::{Catalog, MergeOutcome};

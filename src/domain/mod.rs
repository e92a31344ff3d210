// ==========================================
// Shopfront - domain model layer
// ==========================================
// Record types only: no parsing, no state mutation, no presentation.
// ==========================================

pub mod product;

// Re-export core types
pub use product::{ImportBatch, ImportSummary, Product, RawProductRecord};

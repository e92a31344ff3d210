// ==========================================
// Shopfront - config layer
// ==========================================

pub mod app_config;

// Re-export core types
pub use app_config::AppConfig;

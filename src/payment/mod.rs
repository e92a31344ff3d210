// ==========================================
// Shopfront - payment layer
// ==========================================
// Data behind the checkout panel: accepted assets, the wallet address
// table, and the assembled per-selection details. No processing, no
// verification, no conversion.
// ==========================================

pub mod asset;
pub mod wallets;

// Re-export core types
pub use asset::CryptoAsset;
pub use wallets::{PaymentDetails, WalletDirectory};

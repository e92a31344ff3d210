// ==========================================
// Shopfront - application layer
// ==========================================
// Shared state plus the optional Tauri shell integration.
// ==========================================

pub mod state;

#[cfg(feature = "tauri-app")]
pub mod tauri_commands;

// Re-export
pub use state::AppState;

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;

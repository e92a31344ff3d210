// ==========================================
// Shopfront - application config
// ==========================================
// Operator-editable settings: wallet addresses and the support mailbox.
// Stored as JSON in the platform config dir; every field falls back to a
// default so a missing or partial file never blocks startup.
// ==========================================

use crate::payment::wallets::WalletDirectory;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_DIR_NAME: &str = "shopfront";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Receiving addresses shown at checkout.
    pub wallets: WalletDirectory,
    /// Mailbox buyers send their TX hash and order details to.
    pub support_email: String,
    /// UI locale.
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wallets: WalletDirectory::default(),
            support_email: "orders@shopfront.example".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl AppConfig {
    /// `<platform config dir>/shopfront/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when the
    /// file is absent or unreadable. Never fails.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("no platform config dir; using default config");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "config unreadable; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, raw).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.wallets.btc = "bc1qreal".to_string();
        config.support_email = "pay@shop.example".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"support_email": "x@y.example"}"#).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.support_email, "x@y.example");
        assert_eq!(loaded.wallets, WalletDirectory::default());
        assert_eq!(loaded.locale, "en");
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}

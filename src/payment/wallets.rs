// ==========================================
// Shopfront - wallet directory & payment details
// ==========================================
// Static address table, one per accepted asset. Defaults are placeholders
// the operator overrides via config; no address generation or validation
// happens here.
// ==========================================

use crate::payment::asset::CryptoAsset;
use serde::{Deserialize, Serialize};

/// Receiving address per asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletDirectory {
    pub btc: String,
    pub eth: String,
    pub usdt_trc20: String,
    pub usdt_erc20: String,
}

impl Default for WalletDirectory {
    fn default() -> Self {
        Self {
            btc: "bc1q-your-btc-address-change-me".to_string(),
            eth: "0xYourEthereumAddressChangeMe".to_string(),
            usdt_trc20: "TDYourTronAddressChangeMe".to_string(),
            usdt_erc20: "0xYourEthUsdtAddressChangeMe".to_string(),
        }
    }
}

impl WalletDirectory {
    pub fn address(&self, asset: CryptoAsset) -> &str {
        match asset {
            CryptoAsset::Btc => &self.btc,
            CryptoAsset::Eth => &self.eth,
            CryptoAsset::UsdtTrc20 => &self.usdt_trc20,
            CryptoAsset::UsdtErc20 => &self.usdt_erc20,
        }
    }
}

/// Everything the checkout panel renders for one asset selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub asset: CryptoAsset,
    pub asset_label: String,
    pub network: String,
    pub address: String,
    pub amount_usd: f64,
    /// Payload the frontend encodes as a QR code (the bare address).
    pub qr_payload: String,
    /// Manual-confirmation instruction naming the support mailbox.
    pub instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_lookup_per_asset() {
        let wallets = WalletDirectory {
            btc: "bc1qabc".to_string(),
            eth: "0xeth".to_string(),
            usdt_trc20: "Ttrc".to_string(),
            usdt_erc20: "0xerc".to_string(),
        };

        assert_eq!(wallets.address(CryptoAsset::Btc), "bc1qabc");
        assert_eq!(wallets.address(CryptoAsset::Eth), "0xeth");
        assert_eq!(wallets.address(CryptoAsset::UsdtTrc20), "Ttrc");
        assert_eq!(wallets.address(CryptoAsset::UsdtErc20), "0xerc");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let wallets: WalletDirectory = serde_json::from_str(r#"{"btc": "bc1qreal"}"#).unwrap();
        assert_eq!(wallets.btc, "bc1qreal");
        assert_eq!(wallets.eth, WalletDirectory::default().eth);
    }
}

// ==========================================
// Shopfront - crypto assets
// ==========================================
// The fixed set of assets the checkout panel accepts. Payment is manual
// and off-band: the panel only shows an address and an amount.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CryptoAsset {
    Btc,
    Eth,
    UsdtTrc20,
    UsdtErc20,
}

impl CryptoAsset {
    pub const ALL: [CryptoAsset; 4] = [
        CryptoAsset::Btc,
        CryptoAsset::Eth,
        CryptoAsset::UsdtTrc20,
        CryptoAsset::UsdtErc20,
    ];

    /// Stable code used by the frontend select control.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Eth => "ETH",
            CryptoAsset::UsdtTrc20 => "USDT_TRC20",
            CryptoAsset::UsdtErc20 => "USDT_ERC20",
        }
    }

    /// Human-readable label shown next to the address.
    pub fn label(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Eth => "ETH",
            CryptoAsset::UsdtTrc20 => "USDT (TRC20)",
            CryptoAsset::UsdtErc20 => "USDT (ERC20)",
        }
    }

    /// Network the address lives on.
    pub fn network(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "Bitcoin",
            CryptoAsset::Eth => "Ethereum",
            CryptoAsset::UsdtTrc20 => "Tron (TRC20)",
            CryptoAsset::UsdtErc20 => "Ethereum (ERC20)",
        }
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CryptoAsset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BTC" => Ok(CryptoAsset::Btc),
            "ETH" => Ok(CryptoAsset::Eth),
            "USDT_TRC20" => Ok(CryptoAsset::UsdtTrc20),
            "USDT_ERC20" => Ok(CryptoAsset::UsdtErc20),
            other => Err(format!("unknown asset: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for asset in CryptoAsset::ALL {
            assert_eq!(asset.code().parse::<CryptoAsset>().unwrap(), asset);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&CryptoAsset::UsdtTrc20).unwrap();
        assert_eq!(json, "\"USDT_TRC20\"");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("DOGE".parse::<CryptoAsset>().is_err());
    }
}

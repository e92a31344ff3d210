// ==========================================
// Shopfront - payment API
// ==========================================
// Assembles the checkout panel data for one asset selection. Display
// only: the buyer pays off-band and confirms by email.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::app_config::AppConfig;
use crate::domain::product::Product;
use crate::i18n::t_with_args;
use crate::payment::asset::CryptoAsset;
use crate::payment::wallets::{PaymentDetails, WalletDirectory};

pub struct PaymentApi {
    wallets: WalletDirectory,
    support_email: String,
}

impl PaymentApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            wallets: config.wallets.clone(),
            support_email: config.support_email.clone(),
        }
    }

    /// Checkout details for an explicit USD amount.
    pub fn payment_details(&self, asset: CryptoAsset, amount_usd: f64) -> ApiResult<PaymentDetails> {
        if !amount_usd.is_finite() || amount_usd <= 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "amount must be a positive number, got {amount_usd}"
            )));
        }

        let address = self.wallets.address(asset).to_string();
        let instructions = t_with_args(
            "payment.instructions",
            &[
                ("amount", &format!("{amount_usd:.2}")),
                ("asset", asset.label()),
                ("email", &self.support_email),
            ],
        );

        Ok(PaymentDetails {
            asset,
            asset_label: asset.label().to_string(),
            network: asset.network().to_string(),
            qr_payload: address.clone(),
            address,
            amount_usd,
            instructions,
        })
    }

    /// Checkout details for a selected product (amount = its price).
    pub fn checkout(&self, product: &Product, asset: CryptoAsset) -> ApiResult<PaymentDetails> {
        self.payment_details(asset, product.price_usd)
    }
}

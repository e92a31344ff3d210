// ==========================================
// Shopfront - Tauri commands
// ==========================================
// Frontend-facing glue over the API layer. Payloads are JSON strings;
// errors are the localized user messages plus a stable code.
// ==========================================

use serde::{Deserialize, Serialize};
use tauri::Manager;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::importer::template;
use crate::payment::asset::CryptoAsset;

/// Error response returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

/// Convert an ApiError into the JSON string Tauri hands the frontend.
fn map_api_error(err: ApiError) -> String {
    let response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Import(_) => "IMPORT_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
        .to_string(),
        message: err.user_message(),
    };
    serde_json::to_string(&response).unwrap_or_else(|_| err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("serialization failed: {e}"))
}

fn emit_frontend_event(app: &tauri::AppHandle, event: &str, payload: serde_json::Value) {
    if let Err(e) = app.emit_all(event, payload) {
        tracing::warn!(event, error = %e, "frontend event emit failed");
    }
}

/// Import a product CSV and merge it into the catalog.
#[tauri::command(rename_all = "snake_case")]
pub async fn import_catalog(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    tracing::info!(file_path = %file_path, "[import_catalog] request");

    let outcome = state
        .catalog_api
        .import_from_path(&file_path)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "[import_catalog] failed");
            map_api_error(e)
        })?;

    emit_frontend_event(
        &app,
        "catalog_changed",
        serde_json::json!({ "batch_id": outcome.batch_id }),
    );
    to_json(&outcome)
}

/// List the current catalog.
#[tauri::command(rename_all = "snake_case")]
pub fn list_products(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let products = state.catalog_api.list_products().map_err(map_api_error)?;
    to_json(&products)
}

/// Select a product by id.
#[tauri::command(rename_all = "snake_case")]
pub fn select_product(
    state: tauri::State<'_, AppState>,
    product_id: String,
) -> Result<String, String> {
    let product = state
        .catalog_api
        .select_product(&product_id)
        .map_err(map_api_error)?;
    to_json(&product)
}

/// Checkout panel data: address + amount for the chosen asset. Uses the
/// explicit amount when given, otherwise the selected product's price.
#[tauri::command(rename_all = "snake_case")]
pub fn payment_details(
    state: tauri::State<'_, AppState>,
    asset: String,
    amount_usd: Option<f64>,
) -> Result<String, String> {
    let asset: CryptoAsset = asset
        .parse()
        .map_err(|e: String| map_api_error(ApiError::InvalidInput(e)))?;

    let amount = match amount_usd {
        Some(v) => v,
        None => state
            .catalog_api
            .selected_product()
            .map_err(map_api_error)?
            .map(|p| p.price_usd)
            .ok_or_else(|| map_api_error(ApiError::NotFound("no product selected".to_string())))?,
    };

    let details = state
        .payment_api
        .payment_details(asset, amount)
        .map_err(map_api_error)?;
    to_json(&details)
}

/// Write the downloadable CSV template next to the given directory.
#[tauri::command(rename_all = "snake_case")]
pub fn write_catalog_template(dir: String) -> Result<String, String> {
    template::write_template(std::path::Path::new(&dir))
        .map_err(|e| map_api_error(ApiError::Import(e)))
}

/// Per-session import history for the notifications drawer.
#[tauri::command(rename_all = "snake_case")]
pub fn import_history(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let history = state.catalog_api.import_history().map_err(map_api_error)?;
    to_json(&history)
}

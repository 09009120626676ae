//! Identifier generation handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, IdentifierBatchResponse, IdentifierConfig};
use crate::error::{AppError, Result};

/// Generate a batch of distinct identifiers.
///
/// # Errors
///
/// Returns an error if the configuration is out of bounds or the batch
/// cannot be filled with distinct values.
pub async fn generate_identifiers(
    State(state): State<AppState>,
    Json(config): Json<IdentifierConfig>,
) -> Result<Json<ApiResponse<IdentifierBatchResponse>>> {
    config.validate().map_err(AppError::BadRequest)?;

    let items = state
        .identifier_generator
        .generate(&config, &mut rand::rng())?;

    metrics::counter!("credforge_identifiers_generated_total", "style" => config.style.to_string())
        .increment(items.len() as u64);

    Ok(Json(ApiResponse::success(IdentifierBatchResponse { items })))
}

/// Default identifier configuration.
pub async fn defaults() -> Json<ApiResponse<IdentifierConfig>> {
    Json(ApiResponse::success(IdentifierConfig::default()))
}

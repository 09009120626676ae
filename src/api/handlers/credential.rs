//! Credential generation handlers.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, BoundsQuery, CredentialBatchResponse, CredentialConfig, LengthBounds,
    ModeSwitchRequest,
};
use crate::error::{AppError, Result};

/// Generate a credential batch.
///
/// # Errors
///
/// Returns an error if the configuration is out of bounds.
pub async fn generate_credentials(
    State(state): State<AppState>,
    Json(config): Json<CredentialConfig>,
) -> Result<Json<ApiResponse<CredentialBatchResponse>>> {
    config.validate().map_err(AppError::BadRequest)?;

    let batch = state
        .credential_generator
        .generate(&config, &mut rand::rng());

    metrics::counter!("credforge_credentials_generated_total", "mode" => config.mode.to_string())
        .increment(batch.len() as u64);

    Ok(Json(ApiResponse::success(CredentialBatchResponse::new(
        config.mode,
        batch,
    ))))
}

/// Default credential configuration.
pub async fn defaults() -> Json<ApiResponse<CredentialConfig>> {
    Json(ApiResponse::success(CredentialConfig::default()))
}

/// Length bounds for a mode.
pub async fn bounds(Query(query): Query<BoundsQuery>) -> Json<ApiResponse<LengthBounds>> {
    Json(ApiResponse::success(LengthBounds::for_mode(query.mode)))
}

/// Switch a configuration to another mode, clamping its length.
pub async fn switch_mode(
    Json(request): Json<ModeSwitchRequest>,
) -> Json<ApiResponse<CredentialConfig>> {
    Json(ApiResponse::success(request.config.with_mode(request.mode)))
}

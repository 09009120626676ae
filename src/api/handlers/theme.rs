//! Theme preference handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, ThemeRequest, ThemeResponse};
use crate::error::Result;

/// Current theme.
pub async fn get_theme(State(state): State<AppState>) -> Json<ApiResponse<ThemeResponse>> {
    Json(ApiResponse::success(ThemeResponse {
        theme: state.theme_service.current(),
    }))
}

/// Set the theme.
///
/// # Errors
///
/// Returns an error if the preference cannot be persisted.
pub async fn set_theme(
    State(state): State<AppState>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<ApiResponse<ThemeResponse>>> {
    let theme = state.theme_service.set(request.theme).await?;
    Ok(Json(ApiResponse::success(ThemeResponse { theme })))
}

/// Toggle between dark and light.
///
/// # Errors
///
/// Returns an error if the preference cannot be persisted.
pub async fn toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ThemeResponse>>> {
    let theme = state.theme_service.toggle().await?;
    Ok(Json(ApiResponse::success(ThemeResponse { theme })))
}

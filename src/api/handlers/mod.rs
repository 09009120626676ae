//! HTTP request handlers.

pub mod credential;
pub mod health;
pub mod identifier;
pub mod theme;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::ApiResponse;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Word list could not be loaded or is unusable.
    #[error("Word list error: {0}")]
    WordList(String),

    /// Identifier batch could not be filled with distinct values.
    #[error("Could only produce {produced} of {requested} distinct identifiers")]
    UniquenessExhausted {
        /// Requested batch size.
        requested: u32,
        /// Distinct identifiers produced before giving up.
        produced: u32,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::WordList(_) => ErrorCode::WORDLIST_INVALID,
            Self::UniquenessExhausted { .. } => ErrorCode::UNIQUENESS_EXHAUSTED,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            Self::Storage(_) => ErrorCode::STORAGE_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UniquenessExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::WordList(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                %error_code,
                status = %status,
                message = %message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                %error_code,
                status = %status,
                message = %message,
                "Request rejected"
            );
        }

        (status, Json(ApiResponse::<()>::error(error_code.as_i32(), message))).into_response()
    }
}

/// Storage-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock acquisition failed.
    #[error("Failed to acquire lock: {0}")]
    LockFailed(String),

    /// File I/O error.
    #[error("File I/O error: {0}")]
    FileIO(String),

    /// Backend not available.
    #[error("Storage backend unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::BadRequest("test".to_string()).error_code(),
            ErrorCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UniquenessExhausted {
                requested: 5,
                produced: 1
            }
            .error_code(),
            ErrorCode::UNIQUENESS_EXHAUSTED
        );
        assert_eq!(
            AppError::Storage(StorageError::Unavailable).error_code(),
            ErrorCode::STORAGE_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UniquenessExhausted {
                requested: 2,
                produced: 1
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::WordList("empty".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_uniqueness_message() {
        let err = AppError::UniquenessExhausted {
            requested: 4,
            produced: 2,
        };
        assert_eq!(
            err.to_string(),
            "Could only produce 2 of 4 distinct identifiers"
        );
    }

    #[tokio::test]
    async fn test_error_response_envelope() {
        let response = AppError::UniquenessExhausted {
            requested: 3,
            produced: 1,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 4003);
        assert_eq!(body["message"], "Could only produce 1 of 3 distinct identifiers");
        assert!(body["data"].is_null());
    }
}

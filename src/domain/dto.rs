//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CredentialConfig, GenerationMode, Strength, Theme};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// A single generated credential with its display strength.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialItem {
    /// The generated credential.
    pub value: String,

    /// Strength rating based on length.
    pub strength: Strength,
}

/// Response for credential generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialBatchResponse {
    /// Mode the batch was generated in.
    pub mode: GenerationMode,

    /// Whether the configured length shaped the output.
    pub length_applies: bool,

    /// Generated credentials in order.
    pub items: Vec<CredentialItem>,
}

impl CredentialBatchResponse {
    /// Build a response from a generated batch.
    #[must_use]
    pub fn new(mode: GenerationMode, batch: Vec<String>) -> Self {
        let items = batch
            .into_iter()
            .map(|value| CredentialItem {
                strength: Strength::classify(mode, value.chars().count()),
                value,
            })
            .collect();

        Self {
            mode,
            length_applies: mode.uses_length(),
            items,
        }
    }
}

/// Response for identifier generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierBatchResponse {
    /// Generated identifiers, pairwise distinct.
    pub items: Vec<String>,
}

/// Request to switch a credential config to another mode.
#[derive(Debug, Clone, Deserialize)]
pub struct ModeSwitchRequest {
    /// Current configuration.
    #[serde(default)]
    pub config: CredentialConfig,

    /// Mode to switch to.
    pub mode: GenerationMode,
}

/// Query for length bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundsQuery {
    /// Mode to look up.
    #[serde(default)]
    pub mode: GenerationMode,
}

/// Request to set the theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRequest {
    /// Theme to apply.
    pub theme: Theme,
}

/// Response carrying the current theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    /// Current theme.
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error(3001, "bad request");
        assert_eq!(response.code, 3001);
        assert!(response.data.is_none());

        let body = serde_json::to_value(&response).unwrap();
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "bad request");
    }

    #[test]
    fn test_credential_batch_response() {
        let response = CredentialBatchResponse::new(
            GenerationMode::Pin,
            vec!["123456".to_string(), "123456789012".to_string()],
        );
        assert!(response.length_applies);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].strength, Strength::Weak);
        assert_eq!(response.items[1].strength, Strength::Strong);

        let response =
            CredentialBatchResponse::new(GenerationMode::Memorable, vec!["a-b-1234".to_string()]);
        assert!(!response.length_applies);
    }
}

//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::error::Result;
use crate::service::{CredentialGenerator, IdentifierGenerator, ThemeService, WordLists};
use crate::storage::traits::{PreferenceStorage, Storage};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Preference storage backend.
    pub storage: Arc<dyn Storage>,
    /// Credential generator.
    pub credential_generator: Arc<CredentialGenerator>,
    /// Identifier generator.
    pub identifier_generator: Arc<IdentifierGenerator>,
    /// Theme preference service.
    pub theme_service: Arc<ThemeService>,
    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored theme preference cannot be read.
    pub async fn new(
        config: &AppConfig,
        storage: Arc<dyn Storage>,
        words: Arc<WordLists>,
    ) -> Result<Self> {
        let credential_generator = Arc::new(CredentialGenerator::new(Arc::clone(&words)));

        let identifier_generator =
            Arc::new(IdentifierGenerator::new(words, &config.generator));

        let preferences: Arc<dyn PreferenceStorage> = storage.clone();
        let theme_service = Arc::new(ThemeService::load(preferences).await?);

        Ok(Self {
            storage,
            credential_generator,
            identifier_generator,
            theme_service,
            metrics: None,
        })
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

//! Theme preference service.
//!
//! The preference is read once when the service is created and written back
//! only when it changes.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{Theme, ThemeRecord};
use crate::error::{AppError, Result};
use crate::storage::traits::PreferenceStorage;

/// Holds the current theme and persists changes through the injected storage.
pub struct ThemeService {
    storage: Arc<dyn PreferenceStorage>,
    current: RwLock<Theme>,
    update_lock: Mutex<()>,
}

impl ThemeService {
    /// Load the stored preference, falling back to [`Theme::Dark`].
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub async fn load(storage: Arc<dyn PreferenceStorage>) -> Result<Self> {
        let theme = storage
            .load_theme()
            .await
            .map_err(AppError::Storage)?
            .map(|record| record.theme)
            .unwrap_or_default();

        info!(%theme, "Theme preference loaded");

        Ok(Self {
            storage,
            current: RwLock::new(theme),
            update_lock: Mutex::new(()),
        })
    }

    /// The current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    /// Set the theme, persisting only if it differs from the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the new preference cannot be persisted. The
    /// in-memory theme is left unchanged in that case.
    pub async fn set(&self, theme: Theme) -> Result<Theme> {
        self.update(|_| theme).await
    }

    /// Switch between dark and light.
    ///
    /// # Errors
    ///
    /// Returns an error if the new preference cannot be persisted.
    pub async fn toggle(&self) -> Result<Theme> {
        self.update(Theme::toggled).await
    }

    /// Apply `next` to the current theme and persist the result.
    ///
    /// Updates are serialized so the stored record and the in-memory theme
    /// always agree, even while a save is in flight.
    async fn update(&self, next: impl FnOnce(Theme) -> Theme) -> Result<Theme> {
        let _guard = self.update_lock.lock().await;

        let current = self.current();
        let theme = next(current);
        if theme == current {
            return Ok(theme);
        }

        self.storage
            .save_theme(&ThemeRecord::now(theme))
            .await
            .map_err(AppError::Storage)?;

        *self.current.write() = theme;
        info!(%theme, "Theme preference changed");

        Ok(theme)
    }
}

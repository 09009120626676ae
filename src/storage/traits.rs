//! Storage trait definitions.
//!
//! These traits define the interface for preference backends, enabling swapping
//! between different implementations without changing business logic.

use async_trait::async_trait;

use crate::domain::ThemeRecord;
use crate::error::StorageResult;

/// Preference persistence operations.
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    /// Load the stored theme preference, if any.
    async fn load_theme(&self) -> StorageResult<Option<ThemeRecord>>;

    /// Persist the theme preference, replacing any previous value.
    async fn save_theme(&self, record: &ThemeRecord) -> StorageResult<()>;
}

/// Combined storage trait for all storage operations.
#[async_trait]
pub trait Storage: PreferenceStorage {
    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}

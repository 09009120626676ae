//! In-memory storage backend.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::ThemeRecord;
use crate::error::StorageResult;
use crate::storage::traits::{PreferenceStorage, Storage};

/// Keeps preferences in process memory.
#[derive(Default)]
pub struct MemoryStorage {
    theme: RwLock<Option<ThemeRecord>>,
}

impl MemoryStorage {
    /// Create an empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStorage for MemoryStorage {
    async fn load_theme(&self) -> StorageResult<Option<ThemeRecord>> {
        Ok(self.theme.read().clone())
    }

    async fn save_theme(&self, record: &ThemeRecord) -> StorageResult<()> {
        *self.theme.write() = Some(record.clone());
        Ok(())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[tokio::test]
    async fn test_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load_theme().await.unwrap().is_none());

        storage
            .save_theme(&ThemeRecord::now(Theme::Light))
            .await
            .unwrap();
        assert_eq!(
            storage.load_theme().await.unwrap().map(|r| r.theme),
            Some(Theme::Light)
        );
    }
}

//! File-based storage backend.
//!
//! This backend stores preferences as JSON files with file locking.
//!
//! Directory structure:
//! ```text
//! data/
//! └── preferences/
//!     ├── theme.json
//!     └── theme.json.lock
//! ```

mod preference;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::FileStorageConfig;
use crate::domain::ThemeRecord;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{PreferenceStorage, Storage};

pub use preference::FilePreferenceStorage;

/// File-based storage implementation.
pub struct FileStorage {
    /// Preference document storage.
    preferences: FilePreferenceStorage,
    /// Directory checked by the health probe.
    preferences_dir: PathBuf,
}

impl FileStorage {
    /// Create a new file storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directories cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let preferences_dir = config.data_dir.join("preferences");

        Self::ensure_directory(&preferences_dir)?;

        Ok(Self {
            preferences: FilePreferenceStorage::new(preferences_dir.clone()),
            preferences_dir,
        })
    }

    fn ensure_directory(dir: &Path) -> StorageResult<()> {
        std::fs::create_dir_all(dir).map_err(|e| {
            StorageError::FileIO(format!("Failed to create directory {}: {e}", dir.display()))
        })
    }
}

#[async_trait]
impl PreferenceStorage for FileStorage {
    async fn load_theme(&self) -> StorageResult<Option<ThemeRecord>> {
        self.preferences.load_theme().await
    }

    async fn save_theme(&self, record: &ThemeRecord) -> StorageResult<()> {
        self.preferences.save_theme(record).await
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn health_check(&self) -> StorageResult<()> {
        let metadata = tokio::fs::metadata(&self.preferences_dir).await?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

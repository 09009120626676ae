//! File-based preference storage.

use std::path::PathBuf;

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::Mutex;

use crate::domain::ThemeRecord;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::PreferenceStorage;

const THEME_FILE: &str = "theme.json";
const STAGING_SUFFIX: &str = ".tmp";
const LOCK_SUFFIX: &str = ".lock";

/// Stores each preference as a JSON document guarded by an advisory lock file.
pub struct FilePreferenceStorage {
    /// Directory holding preference documents.
    preferences_dir: PathBuf,
    /// Mutex for coordinating file operations within this process.
    lock: Mutex<()>,
}

impl FilePreferenceStorage {
    /// Create a new file preference storage.
    #[must_use]
    pub fn new(preferences_dir: PathBuf) -> Self {
        Self {
            preferences_dir,
            lock: Mutex::new(()),
        }
    }

    fn path(&self, file_name: &str) -> PathBuf {
        self.preferences_dir.join(file_name)
    }

    /// Open the lock file guarding `file_name`.
    fn lock_file(&self, file_name: &str) -> StorageResult<std::fs::File> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.path(&format!("{file_name}{LOCK_SUFFIX}")))?;
        Ok(file)
    }

    /// Write `value` to a staging file and rename it into place, so readers
    /// see either the previous document or the new one.
    fn write_document<T: serde::Serialize>(&self, file_name: &str, value: &T) -> StorageResult<()> {
        std::fs::create_dir_all(&self.preferences_dir)?;

        let lock = self.lock_file(file_name)?;
        lock.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let written = self.replace_document(file_name, value);

        lock.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        written
    }

    fn replace_document<T: serde::Serialize>(&self, file_name: &str, value: &T) -> StorageResult<()> {
        let staging = self.path(&format!("{file_name}{STAGING_SUFFIX}"));

        let file = std::fs::File::create(&staging)?;
        serde_json::to_writer_pretty(&file, value)?;
        file.sync_all()?;

        std::fs::rename(&staging, self.path(file_name))?;
        Ok(())
    }

    fn read_document<T: serde::de::DeserializeOwned>(
        &self,
        file_name: &str,
    ) -> StorageResult<Option<T>> {
        let path = self.path(file_name);

        if !path.exists() {
            return Ok(None);
        }

        let lock = self.lock_file(file_name)?;
        lock.lock_shared()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let value = std::fs::File::open(&path)
            .map_err(StorageError::from)
            .and_then(|file| Ok(serde_json::from_reader(file)?));

        lock.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        value.map(Some)
    }
}

#[async_trait]
impl PreferenceStorage for FilePreferenceStorage {
    async fn load_theme(&self) -> StorageResult<Option<ThemeRecord>> {
        let _guard = self.lock.lock().await;
        self.read_document(THEME_FILE)
    }

    async fn save_theme(&self, record: &ThemeRecord) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        self.write_document(THEME_FILE, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_theme_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilePreferenceStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.load_theme().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_theme() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilePreferenceStorage::new(temp_dir.path().join("preferences"));

        let record = ThemeRecord::now(Theme::Light);
        storage.save_theme(&record).await.unwrap();

        let loaded = storage.load_theme().await.unwrap().unwrap();
        assert_eq!(loaded, record);

        // Overwrite replaces the document
        let record = ThemeRecord::now(Theme::Dark);
        storage.save_theme(&record).await.unwrap();
        assert_eq!(storage.load_theme().await.unwrap().unwrap().theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(THEME_FILE), "not json").unwrap();
        let storage = FilePreferenceStorage::new(temp_dir.path().to_path_buf());

        let err = storage.load_theme().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_save_replaces_document_atomically() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilePreferenceStorage::new(temp_dir.path().to_path_buf());

        storage.save_theme(&ThemeRecord::now(Theme::Light)).await.unwrap();
        storage.save_theme(&ThemeRecord::now(Theme::Dark)).await.unwrap();

        let staging = format!("{THEME_FILE}{STAGING_SUFFIX}");
        assert!(!temp_dir.path().join(staging).exists());

        let raw = std::fs::read_to_string(temp_dir.path().join(THEME_FILE)).unwrap();
        let record: ThemeRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.theme, Theme::Dark);
    }
}

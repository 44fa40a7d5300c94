//! File-based State Storage Adapter
//!
//! Stores the full store snapshot as a single JSON record under a fixed
//! namespace key in the base directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{StateStorage, StateStorageError, StoreSnapshot};

/// Namespace key for the persisted record; also the file stem on disk.
const STORE_KEY: &str = "chat-store";

/// File-based storage for the conversation store.
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the persisted record.
    fn record_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", STORE_KEY))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.record_path(), json)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<StoreSnapshot>, StateStorageError> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        let snapshot = serde_json::from_str(&json)
            .map_err(|e| StateStorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(snapshot))
    }

    async fn delete(&self) -> Result<(), StateStorageError> {
        let path = self.record_path();
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StateStorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

//! In-Memory State Storage Adapter
//!
//! Volatile slot keeping the snapshot in memory. Useful for testing and
//! development.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{StateStorage, StateStorageError, StoreSnapshot};

/// In-memory storage for the conversation store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    record: Arc<RwLock<Option<StoreSnapshot>>>,
}

impl InMemoryStateStorage {
    /// Create a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a record is stored.
    pub async fn has_record(&self) -> bool {
        self.record.read().await.is_some()
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StateStorageError> {
        *self.record.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoreSnapshot>, StateStorageError> {
        Ok(self.record.read().await.clone())
    }

    async fn delete(&self) -> Result<(), StateStorageError> {
        *self.record.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ChatSession;

    #[tokio::test]
    async fn starts_without_record() {
        let storage = InMemoryStateStorage::new();
        assert!(!storage.has_record().await);
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_and_load_round_trips() {
        let storage = InMemoryStateStorage::new();
        let session = ChatSession::new(None);
        let id = *session.id();
        let snapshot = StoreSnapshot::new(vec![session], Some(id));

        storage.save(&snapshot).await.unwrap();
        let loaded = storage.load().await.unwrap().unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn delete_clears_record() {
        let storage = InMemoryStateStorage::new();
        storage
            .save(&StoreSnapshot::new(Vec::new(), None))
            .await
            .unwrap();

        storage.delete().await.unwrap();
        assert!(!storage.has_record().await);
    }

    #[tokio::test]
    async fn clones_share_the_same_record() {
        let storage = InMemoryStateStorage::new();
        let clone = storage.clone();

        storage
            .save(&StoreSnapshot::new(Vec::new(), None))
            .await
            .unwrap();

        assert!(clone.has_record().await);
    }
}

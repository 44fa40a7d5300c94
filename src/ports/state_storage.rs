//! State Storage Port - durable slot for the conversation store.
//!
//! The full store state is serialized into a single record under a fixed
//! namespace key, tagged with a schema version. Absent or version-mismatched
//! records are treated as empty state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::chat::ChatSession;
use crate::domain::foundation::SessionId;

/// Schema version written with every snapshot.
pub const SCHEMA_VERSION: u32 = 1;

/// The persisted record: sessions plus the current-session reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    pub sessions: Vec<ChatSession>,
    pub current_session_id: Option<SessionId>,
}

impl StoreSnapshot {
    /// Creates a snapshot tagged with the current schema version.
    pub fn new(sessions: Vec<ChatSession>, current_session_id: Option<SessionId>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            sessions,
            current_session_id,
        }
    }

    /// Returns true if the snapshot was written by the current schema.
    pub fn is_current_version(&self) -> bool {
        self.version == SCHEMA_VERSION
    }
}

/// Errors that can occur during state storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the store state.
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Save the snapshot, replacing any previous record.
    ///
    /// # Errors
    /// Returns `StateStorageError` if save fails.
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StateStorageError>;

    /// Load the snapshot, or `None` if no record exists.
    ///
    /// # Errors
    /// Returns `StateStorageError` if the record exists but cannot be read.
    async fn load(&self) -> Result<Option<StoreSnapshot>, StateStorageError>;

    /// Delete the record if present.
    ///
    /// # Errors
    /// Returns `StateStorageError` if deletion fails.
    async fn delete(&self) -> Result<(), StateStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_new_tags_current_version() {
        let snapshot = StoreSnapshot::new(Vec::new(), None);
        assert_eq!(snapshot.version, SCHEMA_VERSION);
        assert!(snapshot.is_current_version());
    }

    #[test]
    fn snapshot_detects_version_mismatch() {
        let snapshot = StoreSnapshot {
            version: SCHEMA_VERSION + 1,
            sessions: Vec::new(),
            current_session_id: None,
        };
        assert!(!snapshot.is_current_version());
    }

    #[test]
    fn storage_error_displays_cause() {
        let err = StateStorageError::SerializationFailed("bad json".to_string());
        assert!(err.to_string().contains("serialize"));
        assert!(err.to_string().contains("bad json"));
    }
}

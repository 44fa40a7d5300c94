//! Conversation store - the single source of truth for sessions and messages.
//!
//! Wraps the pure [`StoreState`] transitions behind an async facade that
//! installs each new snapshot atomically and persists it through the
//! [`StateStorage`] port. Observers can detect changes by comparing `Arc`
//! pointers of successive snapshots.

mod state;

pub use state::StoreState;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::chat::{ChatSession, Message, MessageDraft, MessagePatch};
use crate::domain::foundation::{MessageId, SessionId};
use crate::ports::StateStorage;

/// Async store facade with persist-on-mutation.
///
/// Store operations never fail: a failed persist is logged and the new
/// in-memory snapshot stays authoritative.
pub struct ChatStore {
    state: RwLock<Arc<StoreState>>,
    storage: Arc<dyn StateStorage>,
}

impl ChatStore {
    /// Creates a store rehydrated from the durable slot.
    ///
    /// An absent, unreadable, or version-mismatched record starts the store
    /// empty.
    pub async fn load(storage: Arc<dyn StateStorage>) -> Self {
        let state = match storage.load().await {
            Ok(Some(snapshot)) => {
                let state = StoreState::from_snapshot(snapshot);
                info!(sessions = state.sessions().len(), "store rehydrated");
                state
            }
            Ok(None) => StoreState::empty(),
            Err(err) => {
                warn!(error = %err, "failed to load persisted state, starting empty");
                StoreState::empty()
            }
        };

        Self {
            state: RwLock::new(Arc::new(state)),
            storage,
        }
    }

    /// Builds a new session, makes it current, and returns its id.
    pub async fn create_session(&self, title: Option<String>) -> SessionId {
        let mut guard = self.state.write().await;
        let (next, id) = guard.create_session(title);
        self.install(&mut guard, next).await;
        id
    }

    /// Reassigns the current session; a dangling id is ignored.
    pub async fn set_current_session(&self, session_id: &SessionId) {
        let mut guard = self.state.write().await;
        let next = guard.with_current_session(session_id);
        if next != **guard {
            self.install(&mut guard, next).await;
        }
    }

    /// Appends a message; returns its id, or `None` for an unknown session.
    pub async fn add_message(
        &self,
        session_id: &SessionId,
        draft: MessageDraft,
    ) -> Option<MessageId> {
        let mut guard = self.state.write().await;
        let (next, message_id) = guard.with_message(session_id, draft);
        if message_id.is_some() {
            self.install(&mut guard, next).await;
        }
        message_id
    }

    /// Merges a patch into a message; no-op if either id is unmatched.
    pub async fn update_message(
        &self,
        session_id: &SessionId,
        message_id: &MessageId,
        patch: &MessagePatch,
    ) {
        let mut guard = self.state.write().await;
        let next = guard.with_patched_message(session_id, message_id, patch);
        if next != **guard {
            self.install(&mut guard, next).await;
        }
    }

    /// Removes a session, reassigning or clearing the current reference.
    pub async fn delete_session(&self, session_id: &SessionId) {
        let mut guard = self.state.write().await;
        let next = guard.without_session(session_id);
        if next != **guard {
            self.install(&mut guard, next).await;
        }
    }

    /// Empties the store.
    pub async fn clear_sessions(&self) {
        let mut guard = self.state.write().await;
        let next = StoreState::empty();
        if next != **guard {
            self.install(&mut guard, next).await;
        }
    }

    /// Returns the current session, if any.
    pub async fn current_session(&self) -> Option<ChatSession> {
        self.state.read().await.current_session().cloned()
    }

    /// Returns all sessions, newest-created first.
    pub async fn sessions(&self) -> Vec<ChatSession> {
        self.state.read().await.sessions().to_vec()
    }

    /// Returns a session by id.
    pub async fn session(&self, session_id: &SessionId) -> Option<ChatSession> {
        self.state.read().await.session(session_id).cloned()
    }

    /// Returns a session's messages, empty for an unknown id.
    pub async fn session_messages(&self, session_id: &SessionId) -> Vec<Message> {
        self.state.read().await.session_messages(session_id).to_vec()
    }

    /// Returns the current immutable snapshot.
    pub async fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&*self.state.read().await)
    }

    /// Installs a new snapshot and persists it.
    ///
    /// Runs under the caller's write guard so mutation and persist keep
    /// their relative order.
    async fn install(
        &self,
        guard: &mut tokio::sync::RwLockWriteGuard<'_, Arc<StoreState>>,
        next: StoreState,
    ) {
        **guard = Arc::new(next);
        if let Err(err) = self.storage.save(&guard.to_snapshot()).await {
            warn!(error = %err, "failed to persist store state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;

    async fn empty_store() -> ChatStore {
        ChatStore::load(Arc::new(InMemoryStateStorage::new())).await
    }

    #[tokio::test]
    async fn create_session_sets_current_and_orders_newest_first() {
        let store = empty_store().await;

        let first = store.create_session(None).await;
        let second = store.create_session(None).await;

        let sessions = store.sessions().await;
        assert_eq!(sessions[0].id(), &second);
        assert_eq!(sessions[1].id(), &first);
        assert_eq!(store.current_session().await.unwrap().id(), &second);
    }

    #[tokio::test]
    async fn add_message_assigns_id_and_derives_title() {
        let store = empty_store().await;
        let session_id = store.create_session(None).await;

        let message_id = store
            .add_message(&session_id, MessageDraft::user("hello world"))
            .await;

        assert!(message_id.is_some());
        let session = store.session(&session_id).await.unwrap();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.title(), "hello world...");
    }

    #[tokio::test]
    async fn add_message_to_unknown_session_returns_none() {
        let store = empty_store().await;
        store.create_session(None).await;

        let message_id = store
            .add_message(&SessionId::new(), MessageDraft::user("hello"))
            .await;
        assert!(message_id.is_none());
    }

    #[tokio::test]
    async fn update_message_resolves_placeholder() {
        let store = empty_store().await;
        let session_id = store.create_session(None).await;
        let message_id = store
            .add_message(&session_id, MessageDraft::streaming_placeholder())
            .await
            .unwrap();

        store
            .update_message(&session_id, &message_id, &MessagePatch::resolved("done"))
            .await;

        let messages = store.session_messages(&session_id).await;
        assert_eq!(messages[0].content(), "done");
        assert!(!messages[0].is_streaming());
    }

    #[tokio::test]
    async fn delete_last_session_clears_current() {
        let store = empty_store().await;
        let session_id = store.create_session(None).await;

        store.delete_session(&session_id).await;

        assert!(store.sessions().await.is_empty());
        assert!(store.current_session().await.is_none());
    }

    #[tokio::test]
    async fn clear_sessions_empties_everything() {
        let store = empty_store().await;
        store.create_session(None).await;
        store.create_session(None).await;

        store.clear_sessions().await;

        assert!(store.sessions().await.is_empty());
        assert!(store.current_session().await.is_none());
    }

    #[tokio::test]
    async fn mutations_produce_new_snapshots() {
        let store = empty_store().await;
        let before = store.snapshot().await;

        store.create_session(None).await;
        let after = store.snapshot().await;

        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn noop_mutations_keep_the_snapshot() {
        let store = empty_store().await;
        let session_id = store.create_session(None).await;
        let before = store.snapshot().await;

        store.set_current_session(&session_id).await; // already current
        store.set_current_session(&SessionId::new()).await; // dangling
        store
            .update_message(&session_id, &MessageId::new(), &MessagePatch::resolved("x"))
            .await;
        store.delete_session(&SessionId::new()).await;

        let after = store.snapshot().await;
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn clearing_an_empty_store_keeps_the_snapshot() {
        let store = empty_store().await;
        let before = store.snapshot().await;

        store.clear_sessions().await;

        assert!(Arc::ptr_eq(&before, &store.snapshot().await));
    }

    #[tokio::test]
    async fn reads_do_not_produce_new_snapshots() {
        let store = empty_store().await;
        store.create_session(None).await;

        let first = store.snapshot().await;
        let _ = store.sessions().await;
        let second = store.snapshot().await;

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn store_persists_across_reload() {
        let storage = Arc::new(InMemoryStateStorage::new());

        let store = ChatStore::load(Arc::clone(&storage) as Arc<dyn StateStorage>).await;
        let session_id = store.create_session(None).await;
        store
            .add_message(&session_id, MessageDraft::user("persist me"))
            .await;

        let reloaded = ChatStore::load(storage as Arc<dyn StateStorage>).await;
        let messages = reloaded.session_messages(&session_id).await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "persist me");
        assert_eq!(reloaded.current_session().await.unwrap().id(), &session_id);
    }
}

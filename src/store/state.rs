//! Pure state transitions for the conversation store.
//!
//! Every mutation takes the current state by reference and returns a fresh
//! value; callers install the result as the new snapshot. This keeps the
//! store observable by reference comparison and the transitions trivially
//! testable.

use crate::domain::chat::{ChatSession, Message, MessageDraft, MessagePatch};
use crate::domain::foundation::{MessageId, SessionId};
use crate::ports::StoreSnapshot;

/// The full store state: all sessions plus the current-session reference.
///
/// # Invariants
///
/// - `current_session_id`, when present, references an element of `sessions`
/// - sessions are newest-first at creation; order is stable under other
///   mutations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreState {
    sessions: Vec<ChatSession>,
    current_session_id: Option<SessionId>,
}

impl StoreState {
    /// An empty store: no sessions, no current session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rehydrates state from a persisted snapshot.
    ///
    /// A snapshot written by a different schema version loads as empty state;
    /// there is no migration path.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        if !snapshot.is_current_version() {
            return Self::empty();
        }
        let current_session_id = snapshot
            .current_session_id
            .filter(|id| snapshot.sessions.iter().any(|s| s.id() == id));
        Self {
            sessions: snapshot.sessions,
            current_session_id,
        }
    }

    /// Captures the state for persistence.
    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(self.sessions.clone(), self.current_session_id)
    }

    /// Builds a new session, prepends it, and makes it current.
    pub fn create_session(&self, title: Option<String>) -> (Self, SessionId) {
        let session = ChatSession::new(title);
        let id = *session.id();

        let mut next = self.clone();
        next.sessions.insert(0, session);
        next.current_session_id = Some(id);
        (next, id)
    }

    /// Reassigns the current session.
    ///
    /// A dangling id is ignored so the current-session invariant cannot be
    /// broken from the outside.
    pub fn with_current_session(&self, session_id: &SessionId) -> Self {
        if !self.sessions.iter().any(|s| s.id() == session_id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_session_id = Some(*session_id);
        next
    }

    /// Appends a message to the target session, assigning id and timestamp.
    ///
    /// Returns the new message's id, or `None` (state unchanged) when the
    /// session is unknown.
    pub fn with_message(
        &self,
        session_id: &SessionId,
        draft: MessageDraft,
    ) -> (Self, Option<MessageId>) {
        let mut next = self.clone();
        match next.sessions.iter_mut().find(|s| s.id() == session_id) {
            Some(session) => {
                let message = Message::from_draft(draft);
                let message_id = *message.id();
                session.append(message);
                (next, Some(message_id))
            }
            None => (self.clone(), None),
        }
    }

    /// Merges a patch into a message; no-op if either id is unmatched.
    pub fn with_patched_message(
        &self,
        session_id: &SessionId,
        message_id: &MessageId,
        patch: &MessagePatch,
    ) -> Self {
        let mut next = self.clone();
        if let Some(session) = next.sessions.iter_mut().find(|s| s.id() == session_id) {
            session.patch_message(message_id, patch);
        }
        next
    }

    /// Removes a session, reassigning or clearing the current reference.
    pub fn without_session(&self, session_id: &SessionId) -> Self {
        let mut next = self.clone();
        next.sessions.retain(|s| s.id() != session_id);
        if next.current_session_id.as_ref() == Some(session_id) {
            next.current_session_id = next.sessions.first().map(|s| *s.id());
        }
        next
    }

    /// Returns the sessions, newest-created first.
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    /// Returns the current session id, if any.
    pub fn current_session_id(&self) -> Option<&SessionId> {
        self.current_session_id.as_ref()
    }

    /// Returns the current session, if any.
    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.current_session_id.as_ref()?;
        self.sessions.iter().find(|s| s.id() == id)
    }

    /// Returns a session by id.
    pub fn session(&self, session_id: &SessionId) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id() == session_id)
    }

    /// Returns a session's messages, empty for an unknown id.
    pub fn session_messages(&self, session_id: &SessionId) -> &[Message] {
        self.session(session_id)
            .map(|s| s.messages())
            .unwrap_or(&[])
    }
}

//! ChatSession aggregate - one conversation thread and its messages.

use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionContext;
use crate::domain::foundation::{MessageId, SessionId, Timestamp};

use super::{Message, MessagePatch};

/// Number of characters kept when deriving a title from the first message.
pub const TITLE_MAX_CHARS: usize = 30;

/// Title given to sessions created without an explicit one.
const DEFAULT_TITLE: &str = "New conversation";

/// One independent conversation thread with its own message history.
///
/// # Invariants
///
/// - `messages` keeps insertion order; append-only except for in-place
///   patches by id
/// - `updated_at` is refreshed on every append/patch and never decreases
/// - at most one streaming placeholder is pending per in-flight request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    id: SessionId,
    title: String,
    messages: Vec<Message>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    decision_context: Option<DecisionContext>,
}

impl ChatSession {
    /// Creates an empty session.
    ///
    /// Without an explicit title the session starts with a default one, which
    /// is replaced by a derived title on the first message.
    pub fn new(title: Option<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            decision_context: None,
        }
    }

    /// Appends a message, refreshing `updated_at`.
    ///
    /// If this is the session's first message and the title was not set
    /// explicitly, the title is derived from the message content.
    pub fn append(&mut self, message: Message) {
        if self.messages.is_empty() && self.title == DEFAULT_TITLE {
            self.title = derive_title(message.content());
        }
        self.messages.push(message);
        self.updated_at = Timestamp::now();
    }

    /// Merges a patch into the message with the given id.
    ///
    /// Returns true and refreshes `updated_at` if the message was found;
    /// otherwise leaves the session untouched.
    pub fn patch_message(&mut self, message_id: &MessageId, patch: &MessagePatch) -> bool {
        match self.messages.iter_mut().find(|m| m.id() == message_id) {
            Some(slot) => {
                *slot = slot.with_patch(patch);
                self.updated_at = Timestamp::now();
                true
            }
            None => false,
        }
    }

    /// Attaches classification metadata to the session.
    pub fn set_decision_context(&mut self, context: DecisionContext) {
        self.decision_context = Some(context);
    }

    /// Returns the most recent message that is still streaming, if any.
    pub fn last_streaming_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_streaming())
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last mutated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the classification metadata, if any.
    pub fn decision_context(&self) -> Option<&DecisionContext> {
        self.decision_context.as_ref()
    }
}

/// First `TITLE_MAX_CHARS` characters of the content plus an ellipsis marker.
fn derive_title(content: &str) -> String {
    let truncated: String = content.chars().take(TITLE_MAX_CHARS).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::MessageDraft;

    fn user_message(content: &str) -> Message {
        Message::from_draft(MessageDraft::user(content))
    }

    mod creation {
        use super::*;

        #[test]
        fn new_session_is_empty_with_default_title() {
            let session = ChatSession::new(None);
            assert!(session.messages().is_empty());
            assert_eq!(session.title(), "New conversation");
            assert_eq!(session.created_at(), session.updated_at());
        }

        #[test]
        fn new_session_keeps_explicit_title() {
            let session = ChatSession::new(Some("Job offer".to_string()));
            assert_eq!(session.title(), "Job offer");
        }
    }

    mod title_derivation {
        use super::*;

        #[test]
        fn first_message_derives_title_with_ellipsis() {
            let mut session = ChatSession::new(None);
            session.append(user_message("Should I take the new job?"));
            assert_eq!(session.title(), "Should I take the new job?...");
        }

        #[test]
        fn long_content_is_truncated_to_thirty_chars() {
            let mut session = ChatSession::new(None);
            let content = "a".repeat(80);
            session.append(user_message(&content));
            assert_eq!(session.title(), format!("{}...", "a".repeat(30)));
        }

        #[test]
        fn cjk_content_truncates_on_char_boundaries() {
            let mut session = ChatSession::new(None);
            let content = "我应该接受这个薪资更高的新工作吗".repeat(4);
            session.append(user_message(&content));
            assert_eq!(session.title().chars().count(), 33); // 30 chars + "..."
        }

        #[test]
        fn second_message_does_not_change_title() {
            let mut session = ChatSession::new(None);
            session.append(user_message("first"));
            let title = session.title().to_string();
            session.append(user_message("second"));
            assert_eq!(session.title(), title);
        }

        #[test]
        fn explicit_title_is_not_overwritten() {
            let mut session = ChatSession::new(Some("Pinned".to_string()));
            session.append(user_message("something else"));
            assert_eq!(session.title(), "Pinned");
        }
    }

    mod appending {
        use super::*;

        #[test]
        fn append_preserves_insertion_order() {
            let mut session = ChatSession::new(None);
            session.append(user_message("one"));
            session.append(user_message("two"));
            session.append(user_message("three"));

            let contents: Vec<&str> =
                session.messages().iter().map(|m| m.content()).collect();
            assert_eq!(contents, vec!["one", "two", "three"]);
        }

        #[test]
        fn append_refreshes_updated_at() {
            let mut session = ChatSession::new(None);
            let before = *session.updated_at();
            std::thread::sleep(std::time::Duration::from_millis(10));
            session.append(user_message("hello"));
            assert!(session.updated_at().is_after(&before));
        }
    }

    mod patching {
        use super::*;

        #[test]
        fn patch_message_resolves_placeholder() {
            let mut session = ChatSession::new(None);
            let placeholder = Message::from_draft(MessageDraft::streaming_placeholder());
            let id = *placeholder.id();
            session.append(placeholder);

            let touched = session.patch_message(&id, &MessagePatch::resolved("## Report"));

            assert!(touched);
            assert_eq!(session.messages()[0].content(), "## Report");
            assert!(!session.messages()[0].is_streaming());
        }

        #[test]
        fn patch_unknown_message_is_noop() {
            let mut session = ChatSession::new(None);
            session.append(user_message("hello"));
            let before = session.clone();

            let touched =
                session.patch_message(&MessageId::new(), &MessagePatch::resolved("x"));

            assert!(!touched);
            assert_eq!(session, before);
        }
    }

    mod streaming_lookup {
        use super::*;

        #[test]
        fn finds_most_recent_streaming_message() {
            let mut session = ChatSession::new(None);
            let first = Message::from_draft(MessageDraft::streaming_placeholder());
            let second = Message::from_draft(MessageDraft::streaming_placeholder());
            let second_id = *second.id();
            session.append(first);
            session.append(second);

            assert_eq!(session.last_streaming_message().unwrap().id(), &second_id);
        }

        #[test]
        fn returns_none_without_streaming_messages() {
            let mut session = ChatSession::new(None);
            session.append(user_message("hello"));
            assert!(session.last_streaming_message().is_none());
        }
    }
}

//! Message entity for chat sessions.
//!
//! A message is created either as a finalized user message or as a streaming
//! assistant placeholder that is later resolved in place. Content is mutable
//! only while the message is streaming; id and timestamp never change.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Role of a message sender in a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// User input.
    User,
    /// Assistant response (or pending placeholder).
    Assistant,
}

/// A message within a chat session.
///
/// # Invariants
///
/// - `id` is globally unique and assigned at creation
/// - `timestamp` is set at creation and never changes
/// - content/error mutate at most once, via [`MessagePatch`], when the
///   streaming placeholder is resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: Timestamp,
    is_streaming: bool,
    error: Option<String>,
}

impl Message {
    /// Creates a message from a draft, assigning id and timestamp.
    pub fn from_draft(draft: MessageDraft) -> Self {
        Self {
            id: MessageId::new(),
            role: draft.role,
            content: draft.content,
            timestamp: Timestamp::now(),
            is_streaming: draft.is_streaming,
            error: draft.error,
        }
    }

    /// Reconstitutes a message from persistence.
    pub fn reconstitute(
        id: MessageId,
        role: Role,
        content: String,
        timestamp: Timestamp,
        is_streaming: bool,
        error: Option<String>,
    ) -> Self {
        Self {
            id,
            role,
            content,
            timestamp,
            is_streaming,
            error,
        }
    }

    /// Returns a copy with the patch fields merged in.
    ///
    /// Unset patch fields keep their current values. Id, role, and timestamp
    /// are never touched.
    pub fn with_patch(&self, patch: &MessagePatch) -> Self {
        Self {
            id: self.id,
            role: self.role,
            content: patch.content.clone().unwrap_or_else(|| self.content.clone()),
            timestamp: self.timestamp,
            is_streaming: patch.is_streaming.unwrap_or(self.is_streaming),
            error: patch.error.clone().or_else(|| self.error.clone()),
        }
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was created.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns true while the message awaits its generated response.
    pub fn is_streaming(&self) -> bool {
        self.is_streaming
    }

    /// Returns the error detail, if generation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this message is from the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// A message without id and timestamp, as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub role: Role,
    pub content: String,
    pub is_streaming: bool,
    pub error: Option<String>,
}

impl MessageDraft {
    /// Draft for a finalized user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            is_streaming: false,
            error: None,
        }
    }

    /// Draft for a finalized assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            is_streaming: false,
            error: None,
        }
    }

    /// Draft for an empty assistant placeholder awaiting generation.
    pub fn streaming_placeholder() -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            is_streaming: true,
            error: None,
        }
    }
}

/// Partial update merged into a message by id.
///
/// Typically toggles `is_streaming` off and sets the final content, or
/// records an error alongside the fallback content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub content: Option<String>,
    pub is_streaming: Option<bool>,
    pub error: Option<String>,
}

impl MessagePatch {
    /// Patch resolving a placeholder with its final content.
    pub fn resolved(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            is_streaming: Some(false),
            error: None,
        }
    }

    /// Patch resolving a placeholder with fallback content and error detail.
    pub fn failed(content: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            is_streaming: Some(false),
            error: Some(error.into()),
        }
    }
}

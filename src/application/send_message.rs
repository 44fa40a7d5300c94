//! SendMessage flow.
//!
//! Appends the user message and a streaming assistant placeholder, calls the
//! response generator, then resolves the placeholder with the reply. On
//! generator failure the placeholder is resolved to a fixed fallback text
//! with the error detail captured, never left pending.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::domain::chat::{MessageDraft, MessagePatch};
use crate::domain::decision::DecisionAnalysis;
use crate::domain::foundation::{MessageId, SessionId};
use crate::ports::{GenerationRequest, ResponseGenerator};
use crate::store::ChatStore;

/// User-facing text shown when generation fails.
pub const FALLBACK_REPLY: &str = "Sorry, I ran into a problem. Please try again later.";

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// The target session does not exist.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

/// Result of a completed send.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// Session the exchange was recorded in.
    pub session_id: SessionId,
    /// ID of the stored user message.
    pub user_message_id: MessageId,
    /// ID of the assistant message (the resolved placeholder).
    pub assistant_message_id: MessageId,
    /// Final assistant content (report markdown, or the fallback text).
    pub reply_markdown: String,
    /// Structured analysis, absent when generation failed.
    pub analysis: Option<DecisionAnalysis>,
    /// Captured error detail when generation failed.
    pub error: Option<String>,
}

/// Orchestrates the user-message → placeholder → reply exchange.
pub struct SendMessageHandler {
    store: Arc<ChatStore>,
    generator: Arc<dyn ResponseGenerator>,
}

impl SendMessageHandler {
    /// Creates a new handler.
    pub fn new(store: Arc<ChatStore>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self { store, generator }
    }

    /// Sends a message to a specific session.
    ///
    /// # Errors
    /// - `EmptyContent` if the message is blank
    /// - `SessionNotFound` if the session does not exist
    pub async fn send_to_session(
        &self,
        session_id: SessionId,
        content: &str,
    ) -> Result<SendMessageResult, SendMessageError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SendMessageError::EmptyContent);
        }
        if self.store.session(&session_id).await.is_none() {
            return Err(SendMessageError::SessionNotFound(session_id));
        }
        self.exchange(session_id, content).await
    }

    /// Sends a message to the current session, creating one when absent.
    ///
    /// # Errors
    /// - `EmptyContent` if the message is blank
    pub async fn send(&self, content: &str) -> Result<SendMessageResult, SendMessageError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SendMessageError::EmptyContent);
        }

        let session_id = match self.store.current_session().await {
            Some(session) => *session.id(),
            None => self.store.create_session(None).await,
        };
        self.exchange(session_id, content).await
    }

    /// Runs the exchange against a session expected to exist.
    async fn exchange(
        &self,
        session_id: SessionId,
        content: &str,
    ) -> Result<SendMessageResult, SendMessageError> {
        let user_message_id = self
            .store
            .add_message(&session_id, MessageDraft::user(content))
            .await
            .ok_or(SendMessageError::SessionNotFound(session_id))?;

        let placeholder_id = self
            .store
            .add_message(&session_id, MessageDraft::streaming_placeholder())
            .await
            .ok_or(SendMessageError::SessionNotFound(session_id))?;

        let history = self.store.session_messages(&session_id).await;
        let decision_context = self
            .store
            .session(&session_id)
            .await
            .and_then(|s| s.decision_context().cloned());
        let request = GenerationRequest::new(content, &history, decision_context);

        // Resolve the most recent streaming placeholder; with concurrent
        // sends only the latest placeholder's resolution is guaranteed.
        let target_id = self
            .store
            .session(&session_id)
            .await
            .and_then(|s| s.last_streaming_message().map(|m| *m.id()))
            .unwrap_or(placeholder_id);

        match self.generator.generate(&request).await {
            Ok(reply) => {
                self.store
                    .update_message(
                        &session_id,
                        &target_id,
                        &MessagePatch::resolved(reply.report_markdown.clone()),
                    )
                    .await;
                info!(%session_id, "message exchange completed");

                Ok(SendMessageResult {
                    session_id,
                    user_message_id,
                    assistant_message_id: target_id,
                    reply_markdown: reply.report_markdown,
                    analysis: Some(reply.analysis),
                    error: None,
                })
            }
            Err(err) => {
                let detail = err.to_string();
                self.store
                    .update_message(
                        &session_id,
                        &target_id,
                        &MessagePatch::failed(FALLBACK_REPLY, detail.clone()),
                    )
                    .await;
                error!(%session_id, error = %detail, "generation failed");

                Ok(SendMessageResult {
                    session_id,
                    user_message_id,
                    assistant_message_id: target_id,
                    reply_markdown: FALLBACK_REPLY.to_string(),
                    analysis: None,
                    error: Some(detail),
                })
            }
        }
    }
}

//! Response Generator Port - the generation boundary.
//!
//! Carries the user's message (plus recent history and optional decision
//! context) to whatever produces the analysis reply. This is the only
//! failure boundary the send flow must harden.

use async_trait::async_trait;

use crate::domain::chat::Message;
use crate::domain::decision::{DecisionContext, GeneratedReply};

/// At most this many recent messages accompany a generation request.
pub const HISTORY_LIMIT: usize = 10;

/// A generation request: the message plus recent conversation context.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub message: String,
    pub history: Vec<Message>,
    pub decision_context: Option<DecisionContext>,
}

impl GenerationRequest {
    /// Builds a request, keeping only the most recent `HISTORY_LIMIT`
    /// messages of the given history.
    pub fn new(
        message: impl Into<String>,
        history: &[Message],
        decision_context: Option<DecisionContext>,
    ) -> Self {
        let start = history.len().saturating_sub(HISTORY_LIMIT);
        Self {
            message: message.into(),
            history: history[start..].to_vec(),
            decision_context,
        }
    }
}

/// Errors from the generation boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation transport failed: {0}")]
    Transport(String),

    #[error("Generation returned an unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Port producing an analysis reply for a user message.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate the reply for a request.
    ///
    /// # Errors
    /// Returns `GenerationError` on transport failure or malformed payload.
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GeneratedReply, GenerationError>;
}

//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatSession, Message, Role};
use crate::domain::decision::{DecisionAnalysis, DecisionContext, DecisionType, Level};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of the generation endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message. Required; blank values are rejected.
    #[serde(default)]
    pub message: Option<String>,
    /// Recent conversation history for context (most recent last).
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Optional classification metadata.
    #[serde(default)]
    pub decision_context: Option<DecisionContextDto>,
}

/// One prior message carried for context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: RoleDto,
    pub content: String,
}

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    User,
    Assistant,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDto::User,
            Role::Assistant => RoleDto::Assistant,
        }
    }
}

/// Wire form of the decision context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionContextDto {
    #[serde(rename = "type")]
    pub decision_type: DecisionType,
    pub urgency: Level,
    pub impact: Level,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

impl From<DecisionContextDto> for DecisionContext {
    fn from(dto: DecisionContextDto) -> Self {
        DecisionContext {
            decision_type: dto.decision_type,
            urgency: dto.urgency,
            impact: dto.impact,
            factors: dto.factors,
            constraints: dto.constraints,
            timeline: dto.timeline,
        }
    }
}

/// Body for creating a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body for sending a message into a session.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response of the generation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// The generated report, markdown.
    pub message: String,
    /// Structured analysis summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DecisionAnalysis>,
}

/// View of a session for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: String,
    pub title: String,
    pub message_count: u32,
    pub created_at: String,
    pub updated_at: String,
    /// Whether this is the store's current session.
    pub is_current: bool,
}

impl SessionView {
    /// Builds a view from a session.
    pub fn from_session(session: &ChatSession, is_current: bool) -> Self {
        Self {
            id: session.id().to_string(),
            title: session.title().to_string(),
            message_count: session.messages().len() as u32,
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
            is_current,
        }
    }
}

/// View of a message for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub role: RoleDto,
    pub content: String,
    pub timestamp: String,
    pub is_streaming: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageView {
    /// Builds a view from a message.
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role().into(),
            content: message.content().to_string(),
            timestamp: message.timestamp().to_rfc3339(),
            is_streaming: message.is_streaming(),
            error: message.error().map(str::to_string),
        }
    }
}

/// Response of the in-session send endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub session_id: String,
    pub user_message: MessageView,
    pub assistant_message: MessageView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DecisionAnalysis>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

//! HTTP handlers for chat endpoints.
//!
//! These handlers connect axum routes to the store, the send-message flow,
//! and the response generator.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{SendMessageError, SendMessageHandler};
use crate::domain::chat::{MessageDraft, Role};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{GenerationRequest, ResponseGenerator};
use crate::store::ChatStore;

use super::dto::{
    ChatRequest, ChatResponse, CreateSessionRequest, ErrorResponse, MessageView, RoleDto,
    SendMessageRequest, SendMessageResponse, SessionView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub store: Arc<ChatStore>,
    pub generator: Arc<dyn ResponseGenerator>,
    pub sender: Arc<SendMessageHandler>,
}

impl ChatAppState {
    /// Creates a new ChatAppState, wiring the send flow over the store and
    /// generator.
    pub fn new(store: Arc<ChatStore>, generator: Arc<dyn ResponseGenerator>) -> Self {
        let sender = Arc::new(SendMessageHandler::new(
            Arc::clone(&store),
            Arc::clone(&generator),
        ));
        Self {
            store,
            generator,
            sender,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API Error
// ════════════════════════════════════════════════════════════════════════════════

/// Error surfaced by the chat API; the domain error code picks the status.
#[derive(Debug)]
pub struct ChatApiError(DomainError);

impl ChatApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::new(ErrorCode::InvalidFormat, message))
    }

    fn session_not_found(session_id: &SessionId) -> Self {
        Self(DomainError::new(
            ErrorCode::SessionNotFound,
            format!("Session not found: {}", session_id),
        ))
    }

    fn internal(message: impl Into<String>) -> Self {
        Self(DomainError::new(ErrorCode::InternalError, message))
    }
}

impl From<SendMessageError> for ChatApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            SendMessageError::EmptyContent => Self::bad_request("Invalid message format"),
            SendMessageError::SessionNotFound(id) => Self::session_not_found(&id),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        let DomainError { code, message, .. } = self.0;
        let (status, body) = match code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            ErrorCode::SessionNotFound | ErrorCode::MessageNotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(message))
            }
            ErrorCode::GenerationFailed | ErrorCode::StorageError | ErrorCode::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(message),
            ),
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Generate an analysis reply for a message.
///
/// Stateless: the caller supplies the message plus recent history; nothing is
/// written to the store.
///
/// # Errors
/// - 400 Bad Request: `message` missing, blank, or not a string
pub async fn generate_reply(
    State(state): State<ChatAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    // Typed extraction rejects a non-string `message` with 422; the API
    // contract wants 400 for any malformed message field.
    let Json(body) = body.map_err(|_| ChatApiError::bad_request("Invalid message format"))?;

    let message = body
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ChatApiError::bad_request("Invalid message format"))?;

    let history: Vec<_> = body
        .history
        .iter()
        .map(|entry| {
            let role = match entry.role {
                RoleDto::User => Role::User,
                RoleDto::Assistant => Role::Assistant,
            };
            crate::domain::chat::Message::from_draft(MessageDraft {
                role,
                content: entry.content.clone(),
                is_streaming: false,
                error: None,
            })
        })
        .collect();

    let request = GenerationRequest::new(
        message,
        &history,
        body.decision_context.map(Into::into),
    );

    let reply = state
        .generator
        .generate(&request)
        .await
        .map_err(|e| ChatApiError(DomainError::new(ErrorCode::GenerationFailed, e.to_string())))?;

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            message: reply.report_markdown,
            analysis: Some(reply.analysis),
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Session endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Create a session and make it current.
pub async fn create_session(
    State(state): State<ChatAppState>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(body) = body.map_err(|_| ChatApiError::bad_request("Invalid request body"))?;
    let session_id = state.store.create_session(body.title).await;
    let session = state
        .store
        .session(&session_id)
        .await
        .ok_or_else(|| ChatApiError::internal("session vanished after create"))?;

    Ok((
        StatusCode::CREATED,
        Json(SessionView::from_session(&session, true)),
    ))
}

/// GET /api/sessions - List sessions, newest-created first.
pub async fn list_sessions(State(state): State<ChatAppState>) -> impl IntoResponse {
    let snapshot = state.store.snapshot().await;
    let current = snapshot.current_session_id().copied();

    let views: Vec<SessionView> = snapshot
        .sessions()
        .iter()
        .map(|s| SessionView::from_session(s, current.as_ref() == Some(s.id())))
        .collect();

    (StatusCode::OK, Json(views))
}

/// DELETE /api/sessions/{id} - Delete a session.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: unknown session
pub async fn delete_session(
    State(state): State<ChatAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let session_id = parse_session_id(&session_id)?;
    if state.store.session(&session_id).await.is_none() {
        return Err(ChatApiError::session_not_found(&session_id));
    }

    state.store.delete_session(&session_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/{id}/messages - List a session's messages in order.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: unknown session
pub async fn get_session_messages(
    State(state): State<ChatAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let session_id = parse_session_id(&session_id)?;
    let session = state
        .store
        .session(&session_id)
        .await
        .ok_or_else(|| ChatApiError::session_not_found(&session_id))?;

    let views: Vec<MessageView> = session.messages().iter().map(MessageView::from_message).collect();
    Ok((StatusCode::OK, Json(views)))
}

/// POST /api/sessions/{id}/messages - Run the send-message flow.
///
/// Appends the user message and resolves the assistant reply in one call.
///
/// # Errors
/// - 400 Bad Request: malformed id or blank message
/// - 404 Not Found: unknown session
pub async fn send_message(
    State(state): State<ChatAppState>,
    Path(session_id): Path<String>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let session_id = parse_session_id(&session_id)?;
    let Json(body) = body.map_err(|_| ChatApiError::bad_request("Invalid message format"))?;
    let message = body.message.unwrap_or_default();

    let result = state
        .sender
        .send_to_session(session_id, &message)
        .await
        .map_err(ChatApiError::from)?;

    let messages = state.store.session_messages(&result.session_id).await;
    let view_of = |id| {
        messages
            .iter()
            .find(|m| m.id() == id)
            .map(MessageView::from_message)
    };

    let user_message = view_of(&result.user_message_id)
        .ok_or_else(|| ChatApiError::internal("user message missing"))?;
    let assistant_message = view_of(&result.assistant_message_id)
        .ok_or_else(|| ChatApiError::internal("assistant message missing"))?;

    Ok((
        StatusCode::OK,
        Json(SendMessageResponse {
            session_id: result.session_id.to_string(),
            user_message,
            assistant_message,
            analysis: result.analysis,
        }),
    ))
}

fn parse_session_id(raw: &str) -> Result<SessionId, ChatApiError> {
    raw.parse()
        .map_err(|_| ChatApiError::bad_request("Invalid session ID format"))
}

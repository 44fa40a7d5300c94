//! Axum routes for chat endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    create_session, delete_session, generate_reply, get_session_messages, list_sessions,
    send_message, ChatAppState,
};

/// Creates routes for chat endpoints.
///
/// REST Endpoints:
/// - POST /api/chat - Generate an analysis reply (stateless)
/// - POST /api/sessions - Create a session
/// - GET /api/sessions - List sessions
/// - DELETE /api/sessions/:id - Delete a session
/// - GET /api/sessions/:id/messages - List a session's messages
/// - POST /api/sessions/:id/messages - Run the send-message flow
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/chat", post(generate_reply))
        .route("/sessions", post(create_session).get(list_sessions))
        .route("/sessions/:session_id", delete(delete_session))
        .route(
            "/sessions/:session_id/messages",
            get(get_session_messages).post(send_message),
        )
}

/// Combined router with all chat routes under /api.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().nest("/api", chat_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_routes_creates_valid_router() {
        let _routes = chat_routes();
    }

    #[test]
    fn chat_router_creates_combined_router() {
        let _router = chat_router();
    }
}

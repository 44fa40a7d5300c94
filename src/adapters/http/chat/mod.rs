//! Chat HTTP endpoints: generation, sessions, and the send-message flow.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ChatAppState;
pub use routes::{chat_router, chat_routes};

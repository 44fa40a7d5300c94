//! Application layer - orchestration over the store and the ports.

mod send_message;

pub use send_message::{SendMessageError, SendMessageHandler, SendMessageResult, FALLBACK_REPLY};

//! Chat module - sessions and messages.

mod message;
mod session;

pub use message::{Message, MessageDraft, MessagePatch, Role};
pub use session::{ChatSession, TITLE_MAX_CHARS};

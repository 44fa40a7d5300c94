//! HTTP adapters (axum).

pub mod chat;

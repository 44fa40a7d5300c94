//! Domain layer - chat and decision-analysis types with no I/O.

pub mod chat;
pub mod decision;
pub mod foundation;

//! Storage adapters for the durable state slot.
//!
//! - `FileStateStorage`: JSON file on disk, survives restarts
//! - `InMemoryStateStorage`: volatile slot for tests and development

mod file_state_storage;
mod in_memory_state_storage;

pub use file_state_storage::FileStateStorage;
pub use in_memory_state_storage::InMemoryStateStorage;

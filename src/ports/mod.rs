//! Ports - interfaces the core exposes to its collaborators.

mod response_generator;
mod state_storage;

pub use response_generator::{
    GenerationError, GenerationRequest, ResponseGenerator, HISTORY_LIMIT,
};
pub use state_storage::{StateStorage, StateStorageError, StoreSnapshot, SCHEMA_VERSION};

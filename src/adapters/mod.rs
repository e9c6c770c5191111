//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Draft storage (in-memory, file)

pub mod storage;

pub use storage::{FileDraftStorage, InMemoryDraftStorage};

//! Storage Adapters
//!
//! Implementations of the DraftStorage port.
//!
//! ## Available Adapters
//!
//! - **FileDraftStorage** - Stores each draft as a JSON file on disk
//! - **InMemoryDraftStorage** - Stores drafts in memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDraftStorage, InMemoryDraftStorage};
//!
//! // Durable: file-based storage
//! let storage = FileDraftStorage::new("./data/drafts");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryDraftStorage::new();
//! ```

mod file_draft_storage;
mod in_memory_draft_storage;

pub use file_draft_storage::FileDraftStorage;
pub use in_memory_draft_storage::InMemoryDraftStorage;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the form engine and the outside world. Adapters implement these ports.
//!
//! - `DraftStorage` - Local durable key-value store for drafts
//! - `SubmissionGateway` - Remote API that creates and updates records
//! - `SubmissionReader` - Remote API that loads records for editing

mod draft_storage;
mod submission_gateway;
mod submission_reader;

pub use draft_storage::{DraftStorage, DraftStorageError};
pub use submission_gateway::{GatewayError, SubmissionGateway};
pub use submission_reader::SubmissionReader;

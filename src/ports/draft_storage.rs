//! Draft Storage Port - Interface for the local key-value store drafts live in.
//!
//! Local storage is fast and synchronous, so unlike the remote ports this
//! trait is not async. Implementations must be shareable with the autosave
//! task.

/// Errors that can occur during draft storage operations
#[derive(Debug, thiserror::Error)]
pub enum DraftStorageError {
    #[error("Storage quota exceeded writing {key} ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for a durable string key-value store
pub trait DraftStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    fn get(&self, key: &str) -> Result<Option<String>, DraftStorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `DraftStorageError::QuotaExceeded` if the store is full
    fn set(&self, key: &str, value: &str) -> Result<(), DraftStorageError>;

    /// Remove the value under `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), DraftStorageError>;

    /// Check if a value exists under `key` without reading it
    fn contains(&self, key: &str) -> Result<bool, DraftStorageError>;
}

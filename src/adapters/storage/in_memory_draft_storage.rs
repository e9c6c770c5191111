//! In-Memory Draft Storage Adapter
//!
//! Stores drafts in a shared map. Useful for testing and for embedding the
//! form engine where no durable medium is available. Can simulate a size
//! quota and an unavailable store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::ports::{DraftStorage, DraftStorageError};

/// In-memory key-value storage for drafts
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
    unavailable: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryDraftStorage {
    /// Create a new unbounded in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that rejects writes once keys and values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every operation fail, as a browser in private mode would
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `get` calls so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a raw value directly, bypassing quota and write counting
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn check_available(&self) -> Result<(), DraftStorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DraftStorageError::Unavailable("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

fn poisoned<T>(_: T) -> DraftStorageError {
    DraftStorageError::Unavailable("storage lock poisoned".to_string())
}

impl DraftStorage for InMemoryDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DraftStorageError> {
        self.check_available()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftStorageError> {
        self.check_available()?;
        let mut entries = self.entries.write().map_err(poisoned)?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let bytes = others + key.len() + value.len();
            if bytes > quota {
                return Err(DraftStorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftStorageError> {
        self.check_available()?;
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, DraftStorageError> {
        self.check_available()?;
        Ok(self.entries.read().map_err(poisoned)?.contains_key(key))
    }
}

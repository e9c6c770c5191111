//! Draft autosave configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::{FileDraftStorage, InMemoryDraftStorage};
use crate::ports::DraftStorage;

/// Longest accepted quiet period before an autosave
const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Draft persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    /// Quiet period after the last edit before a draft is written
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Prefix of every draft storage key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Directory for file-backed drafts; in-memory storage when unset
    pub storage_dir: Option<PathBuf>,
}

impl DraftConfig {
    /// Debounce delay as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Build the draft store this configuration selects
    ///
    /// File-backed under `storage_dir` when set, otherwise in memory.
    pub fn storage(&self) -> Arc<dyn DraftStorage> {
        match &self.storage_dir {
            Some(dir) => Arc::new(FileDraftStorage::new(dir)),
            None => Arc::new(InMemoryDraftStorage::new()),
        }
    }

    /// Validate draft configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 || self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ValidationError::InvalidDebounce);
        }
        if self.key_prefix.is_empty() || self.key_prefix.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidKeyPrefix);
        }
        Ok(())
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            key_prefix: default_key_prefix(),
            storage_dir: None,
        }
    }
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_key_prefix() -> String {
    "meliaf_draft".to_string()
}

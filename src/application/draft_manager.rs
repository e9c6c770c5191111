//! DraftManager - Session-scoped draft persistence.
//!
//! Wraps a [`DraftStorage`] with the rules for one form session: a fixed key,
//! skipping writes whose content is unchanged, and swallowing every storage
//! or parse failure after logging it.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::draft::{fingerprint, Draft, DraftKey};
use crate::domain::submission::StudyForm;
use crate::ports::DraftStorage;

/// Reads and writes the draft of a single form session.
pub struct DraftManager {
    storage: Arc<dyn DraftStorage>,
    key: DraftKey,
    state: Mutex<WriteState>,
}

/// Guarded together so a clear can never interleave with a write.
#[derive(Debug, Default)]
struct WriteState {
    last_written: Option<String>,
    /// Bumped by every clear; saves requested before it are dropped.
    generation: u64,
}

impl DraftManager {
    pub fn new(storage: Arc<dyn DraftStorage>, key: DraftKey) -> Self {
        Self {
            storage,
            key,
            state: Mutex::new(WriteState::default()),
        }
    }

    pub fn key(&self) -> &DraftKey {
        &self.key
    }

    /// Writes `form` unless it matches the last successful write.
    ///
    /// Returns whether a write happened. Failures are logged and reported
    /// as `false`.
    pub fn save_draft(&self, form: &StudyForm) -> bool {
        let generation = self.generation();
        self.save_draft_since(form, generation)
    }

    /// Current clear count, captured when a delayed save is scheduled.
    pub(crate) fn generation(&self) -> u64 {
        self.state().generation
    }

    /// Like [`save_draft`](Self::save_draft), but skipped if the draft was
    /// cleared after `generation` was read.
    pub(crate) fn save_draft_since(&self, form: &StudyForm, generation: u64) -> bool {
        let serialized = match serde_json::to_string(form) {
            Ok(s) => s,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize draft");
                return false;
            }
        };
        let digest = fingerprint(&serialized);

        let mut state = self.state();
        if state.generation != generation {
            debug!(key = %self.key, "Draft cleared since save was requested, skipping write");
            return false;
        }
        if state.last_written.as_deref() == Some(digest.as_str()) {
            debug!(key = %self.key, "Draft unchanged, skipping write");
            return false;
        }

        let envelope = Draft {
            saved_at: Utc::now(),
            form: form.clone(),
        };
        let value = match serde_json::to_string(&envelope) {
            Ok(v) => v,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize draft envelope");
                return false;
            }
        };

        match self.storage.set(self.key.as_str(), &value) {
            Ok(()) => {
                state.last_written = Some(digest);
                debug!(key = %self.key, bytes = value.len(), "Draft saved");
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Draft save failed");
                false
            }
        }
    }

    /// Reads the stored draft, or `None` if there is none or it is unreadable.
    pub fn load_draft(&self) -> Option<Draft> {
        let raw = match self.storage.get(self.key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Draft read failed");
                return None;
            }
        };

        let draft: Draft = match serde_json::from_str(&raw) {
            Ok(d) => d,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored draft is malformed, ignoring");
                return None;
            }
        };

        // The stored content is now known, so re-saving it is a no-op.
        if let Ok(serialized) = serde_json::to_string(&draft.form) {
            self.state().last_written = Some(fingerprint(&serialized));
        }
        Some(draft)
    }

    pub fn has_draft(&self) -> bool {
        match self.storage.contains(self.key.as_str()) {
            Ok(found) => found,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Draft existence check failed");
                false
            }
        }
    }

    /// Removes the draft and forgets the last written content.
    pub fn clear_draft(&self) {
        let mut state = self.state();
        if let Err(e) = self.storage.remove(self.key.as_str()) {
            warn!(key = %self.key, error = %e, "Draft removal failed");
        }
        state.last_written = None;
        state.generation += 1;
        debug!(key = %self.key, "Draft cleared");
    }

    fn state(&self) -> MutexGuard<'_, WriteState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

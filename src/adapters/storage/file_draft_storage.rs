//! File-based Draft Storage Adapter
//!
//! Stores each draft as a JSON file on disk, one file per key, so drafts
//! survive process restarts the way browser local storage survives reloads.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::{DraftStorage, DraftStorageError};

/// File-based storage for drafts
#[derive(Debug, Clone)]
pub struct FileDraftStorage {
    base_path: PathBuf,
}

impl FileDraftStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileDraftStorage::new("./data/drafts");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced so a key can never
    /// escape the base directory.
    fn file_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe}.json"))
    }

    fn ensure_dir(&self) -> Result<(), DraftStorageError> {
        fs::create_dir_all(&self.base_path).map_err(|e| DraftStorageError::IoError(e.to_string()))
    }
}

impl DraftStorage for FileDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DraftStorageError> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DraftStorageError::IoError(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftStorageError> {
        self.ensure_dir()?;
        let path = self.file_path(key);

        // Write next to the target and rename so a crash never leaves half a draft.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| DraftStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| DraftStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftStorageError> {
        let path = self.file_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| DraftStorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, DraftStorageError> {
        Ok(self.file_path(key).exists())
    }
}

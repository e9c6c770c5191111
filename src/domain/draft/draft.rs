//! The stored draft: a form snapshot and when it was taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::submission::StudyForm;

/// A recoverable snapshot of an in-progress form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub saved_at: DateTime<Utc>,
    pub form: StudyForm,
}

/// Stable digest of a serialized form, used to skip identical rewrites.
pub fn fingerprint(serialized_form: &str) -> String {
    format!("{:x}", Sha256::digest(serialized_form.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint("{\"a\":1}"), fingerprint("{\"a\":1}"));
        assert_ne!(fingerprint("{\"a\":1}"), fingerprint("{\"a\":2}"));
        assert_eq!(fingerprint("").len(), 64);
    }

    #[test]
    fn envelope_uses_camel_case() {
        let draft = Draft {
            saved_at: Utc::now(),
            form: StudyForm::default(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("savedAt").is_some());
        assert!(value["form"].get("studyTitle").is_some());
    }
}

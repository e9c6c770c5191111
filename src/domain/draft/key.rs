//! Session-scoped storage keys for drafts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::SubmissionId;

/// Whether a form session creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "id")]
pub enum SessionMode {
    Create,
    Edit(SubmissionId),
}

/// The storage key a session's draft lives under.
///
/// Fixed for the lifetime of a session. Create and edit sessions never
/// share a key, and neither do edits of different records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey(String);

impl DraftKey {
    pub fn for_session(prefix: &str, mode: SessionMode) -> Self {
        match mode {
            SessionMode::Create => Self(format!("{prefix}_new")),
            SessionMode::Edit(id) => Self(format!("{prefix}_edit_{id}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_key_is_stable() {
        let a = DraftKey::for_session("meliaf_draft", SessionMode::Create);
        let b = DraftKey::for_session("meliaf_draft", SessionMode::Create);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "meliaf_draft_new");
    }

    #[test]
    fn edit_keys_are_isolated() {
        let first = SubmissionId::new();
        let second = SubmissionId::new();
        let create = DraftKey::for_session("meliaf_draft", SessionMode::Create);
        let edit_first = DraftKey::for_session("meliaf_draft", SessionMode::Edit(first));
        let edit_second = DraftKey::for_session("meliaf_draft", SessionMode::Edit(second));

        assert_ne!(create, edit_first);
        assert_ne!(edit_first, edit_second);
        assert_eq!(edit_first.to_string(), format!("meliaf_draft_edit_{first}"));
    }
}

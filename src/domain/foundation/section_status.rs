//! SectionStatus enum for tracking completion of form sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of one form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    #[default]
    Incomplete,
    Complete,
    /// Conditional section hidden by the current answers.
    NotApplicable,
}

impl SectionStatus {
    /// Returns true if the section counts towards the completed total.
    pub fn is_complete(&self) -> bool {
        matches!(self, SectionStatus::Complete)
    }

    /// Returns true if the section counts towards the denominator.
    pub fn is_applicable(&self) -> bool {
        !matches!(self, SectionStatus::NotApplicable)
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionStatus::Incomplete => "Incomplete",
            SectionStatus::Complete => "Complete",
            SectionStatus::NotApplicable => "Not Applicable",
        };
        write!(f, "{}", s)
    }
}

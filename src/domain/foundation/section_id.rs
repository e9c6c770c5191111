//! SectionId enum representing the six parts of the submission form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six form sections, A through F. Section C is conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionId {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SectionId {
    /// Returns all sections in canonical order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::A,
            SectionId::B,
            SectionId::C,
            SectionId::D,
            SectionId::E,
            SectionId::F,
        ]
    }

    /// Returns true for sections whose applicability depends on other answers.
    pub fn is_conditional(&self) -> bool {
        matches!(self, SectionId::C)
    }

    /// Returns the single-letter label.
    pub fn letter(&self) -> char {
        match self {
            SectionId::A => 'A',
            SectionId::B => 'B',
            SectionId::C => 'C',
            SectionId::D => 'D',
            SectionId::E => 'E',
            SectionId::F => 'F',
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionId::A => "Study Identification",
            SectionId::B => "Study Classification",
            SectionId::C => "Research Details",
            SectionId::D => "Timeline and Status",
            SectionId::E => "Funding and Resources",
            SectionId::F => "Outputs and Uptake",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.letter(), self.display_name())
    }
}

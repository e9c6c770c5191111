//! Error types for the domain layer.

use thiserror::Error;

/// A single rule a form value breaks, tagged with the camelCase field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' is inconsistent: {reason}")]
    Inconsistent { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a cross-field consistency error.
    pub fn inconsistent(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Inconsistent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the field this error is attached to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Inconsistent { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("studyTitle");
        assert_eq!(format!("{}", err), "Field 'studyTitle' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("contactEmail", "missing @ symbol");
        assert_eq!(
            format!("{}", err),
            "Field 'contactEmail' has invalid format: missing @ symbol"
        );
    }

    #[test]
    fn field_returns_attached_field_name() {
        let err = ValidationError::inconsistent("expectedEndDate", "before start date");
        assert_eq!(err.field(), "expectedEndDate");
    }
}

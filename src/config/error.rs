//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Autosave debounce must be between 1 and 60000 milliseconds")]
    InvalidDebounce,

    #[error("Draft key prefix must be non-empty and contain no whitespace")]
    InvalidKeyPrefix,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}

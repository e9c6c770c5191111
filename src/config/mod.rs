//! Form engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MELIAF` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use meliaf_form::config::FormConfig;
//!
//! let config = FormConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Autosave after {:?}", config.draft.debounce());
//! ```

mod draft;
mod error;
mod features;

pub use draft::DraftConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormConfig {
    /// Draft persistence (debounce, key prefix, storage directory)
    #[serde(default)]
    pub draft: DraftConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl FormConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MELIAF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MELIAF__DRAFT__DEBOUNCE_MS=1500` -> `draft.debounce_ms = 1500`
    /// - `MELIAF__FEATURES__JSON_LOGS=true` -> `features.json_logs = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MELIAF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()?;
        EnvFilter::try_new(&self.features.log_filter)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MELIAF__DRAFT__DEBOUNCE_MS");
        env::remove_var("MELIAF__DRAFT__KEY_PREFIX");
        env::remove_var("MELIAF__DRAFT__STORAGE_DIR");
        env::remove_var("MELIAF__FEATURES__ENABLE_AUTOSAVE");
        env::remove_var("MELIAF__FEATURES__JSON_LOGS");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = FormConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.draft.debounce_ms, 1000);
        assert_eq!(config.draft.key_prefix, "meliaf_draft");
        assert!(config.features.enable_autosave);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MELIAF__DRAFT__DEBOUNCE_MS", "2500");
        env::set_var("MELIAF__DRAFT__STORAGE_DIR", "/tmp/meliaf-drafts");
        env::set_var("MELIAF__FEATURES__ENABLE_AUTOSAVE", "false");
        let result = FormConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.draft.debounce_ms, 2500);
        assert_eq!(
            config.draft.storage_dir.as_deref(),
            Some(std::path::Path::new("/tmp/meliaf-drafts"))
        );
        assert!(!config.features.enable_autosave);
    }

    #[test]
    fn test_validate_rejects_bad_log_filter() {
        let mut config = FormConfig::default();
        config.features.log_filter = "meliaf_form=loudest".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}

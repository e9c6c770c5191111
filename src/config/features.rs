//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Write drafts automatically while the user edits
    #[serde(default = "default_true")]
    pub enable_autosave: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Log filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_autosave: true,
            json_logs: false,
            log_filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "meliaf_form=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_autosave);
        assert!(!flags.json_logs);
        assert_eq!(flags.log_filter, "meliaf_form=info");
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_autosave": false,
            "json_logs": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_autosave);
        assert!(flags.json_logs);
        assert_eq!(flags.log_filter, "meliaf_form=info");
    }
}

//! Semantic validation of a parsed configuration.
//!
//! Schema-level problems (wrong types, missing required keys) surface during
//! parsing; this module covers the values the schema cannot express.

use crate::config::SuiteConfig;
use crate::error::{ConfigError, Result};

/// Parallel modes accepted by the downstream test runner.
const PARALLEL_MODES: &[&str] = &["tests", "methods", "classes", "instances", "none"];

impl SuiteConfig {
    /// Validate values the type system cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if !PARALLEL_MODES.contains(&self.web_driver.parallel.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "parallel".to_string(),
                value: self.web_driver.parallel.clone(),
                hint: format!("Must be one of: {}", PARALLEL_MODES.join(", ")),
            });
        }

        if self.web_driver.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.maxAttempts".to_string(),
                value: "0".to_string(),
                hint: "At least one attempt is required".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with_web_driver(web_driver: serde_json::Value) -> SuiteConfig {
        SuiteConfig::from_value(json!({
            "webDriverConfiguration": web_driver,
            "tests": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = config_with_web_driver(json!({}));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_parallel_mode() {
        let config = config_with_web_driver(json!({"parallel": "everything"}));
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "parallel"
        ));
    }

    #[test]
    fn test_accepts_all_parallel_modes() {
        for mode in PARALLEL_MODES {
            let config = config_with_web_driver(json!({ "parallel": mode }));
            assert!(config.validate().is_ok(), "mode {mode} should be valid");
        }
    }

    #[test]
    fn test_rejects_zero_retry_attempts() {
        let config = config_with_web_driver(json!({"retry": {"maxAttempts": 0}}));
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "retry.maxAttempts"
        ));
    }
}

//! Error types for configuration loading and validation.
//!
//! Each variant carries enough context to be actionable from the command
//! line: the offending path, field, or value, plus a hint where one helps.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Configuration file not found: {}\n\nHint: suitegen reads configuration/config.json relative to the working directory", .0.display())]
    NotFound(PathBuf),

    /// Config file has invalid JSON syntax or the wrong shape
    #[error("Invalid JSON in configuration file: {0}\n\nHint: Use a JSON validator to check syntax")]
    InvalidJson(#[from] serde_json::Error),

    /// Missing required top-level configuration key
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ConfigError::NotFound(PathBuf::from("configuration/config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Configuration file not found"));
        assert!(msg.contains("configuration/config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            field: "parallel".to_string(),
            value: "everything".to_string(),
            hint: "Must be one of: tests, methods, classes, instances, none".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'parallel'"));
        assert!(msg.contains("everything"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = ConfigError::MissingField {
            field: "tests".to_string(),
            hint: "Add a 'tests' object mapping module names to flows".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Missing required field: tests"));
    }
}

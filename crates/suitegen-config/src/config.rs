//! Typed model of `configuration/config.json`.
//!
//! The document has two required top-level keys:
//!
//! - `webDriverConfiguration` — browser session and run settings shared by
//!   every generated suite (thread count, parallel mode, retry policy, ...).
//! - `tests` — an ordered mapping from module name to module descriptor.
//!
//! Inside a module descriptor, `active` and `suiteName` are reserved keys;
//! every other key is a flow descriptor. Key order from the JSON source is
//! preserved because it determines suite-generation order.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    #[serde(rename = "webDriverConfiguration")]
    pub web_driver: WebDriverConfiguration,

    /// Module name -> module descriptor, in source order.
    pub tests: IndexMap<String, ModuleConfig>,
}

/// Browser session and run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDriverConfiguration {
    /// TestNG thread count. Absent or non-numeric values fall back to 1
    /// rather than failing the parse.
    #[serde(
        default = "default_thread_count",
        deserialize_with = "de_thread_count"
    )]
    pub thread_count: u32,

    /// TestNG parallel mode for generated suites.
    #[serde(default = "default_parallel")]
    pub parallel: String,

    #[serde(default)]
    pub headless: bool,

    #[serde(default)]
    pub url_test: Option<String>,

    /// Window size argument, e.g. "--window-size=1920,1080".
    #[serde(default)]
    pub browser_size: Option<String>,

    #[serde(default)]
    pub downloads: Option<PathBuf>,

    #[serde(default)]
    pub uploads: Option<PathBuf>,

    #[serde(default)]
    pub evidences: Option<PathBuf>,

    /// Retry policy for element interaction in the test harness.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for WebDriverConfiguration {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count(),
            parallel: default_parallel(),
            headless: false,
            url_test: None,
            browser_size: None,
            downloads: None,
            uploads: None,
            evidences: None,
            retry: RetryPolicy::default(),
        }
    }
}

/// Retry policy for browser element interaction.
///
/// Supplied as configuration so the harness never hardcodes attempt counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between attempts, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl RetryPolicy {
    /// Delay between attempts as a `Duration`.
    pub fn backoff(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.backoff_ms)
    }
}

/// A named group of test flows sharing one generated suite descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub active: bool,

    /// Display name for the generated suite. Defaults to "Suite - {module}".
    #[serde(rename = "suiteName", default)]
    pub suite_name: Option<String>,

    /// Flow key -> flow descriptor, in source order. Every non-reserved key
    /// of the module object lands here.
    #[serde(flatten)]
    pub flows: IndexMap<String, FlowConfig>,
}

impl ModuleConfig {
    /// Suite display name, falling back to the conventional default.
    pub fn suite_name_for(&self, module_key: &str) -> String {
        self.suite_name
            .clone()
            .unwrap_or_else(|| format!("Suite - {}", module_key))
    }

    /// Flows with `active: true`, in source order.
    pub fn active_flows(&self) -> impl Iterator<Item = (&str, &FlowConfig)> {
        self.flows
            .iter()
            .filter(|(_, flow)| flow.active)
            .map(|(key, flow)| (key.as_str(), flow))
    }
}

/// A single test scenario within a module, mapped to one runnable test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub active: bool,

    /// Display name for the `<test>` block. Defaults to the flow key.
    #[serde(default)]
    pub name: Option<String>,
}

impl FlowConfig {
    /// Display name, falling back to the flow key.
    pub fn display_name<'a>(&'a self, flow_key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(flow_key)
    }
}

impl SuiteConfig {
    /// Load the configuration from a JSON file, read once.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io(e)
            }
        })?;
        debug!(path = %path.display(), "read configuration");

        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(value)
    }

    /// Build the configuration from an already-parsed JSON value.
    ///
    /// Both required top-level keys must be present; everything below them
    /// is validated by the typed model.
    pub fn from_value(value: Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| ConfigError::MissingField {
            field: "webDriverConfiguration".to_string(),
            hint: "The configuration root must be a JSON object".to_string(),
        })?;

        for field in ["webDriverConfiguration", "tests"] {
            if !object.contains_key(field) {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                    hint: match field {
                        "webDriverConfiguration" => {
                            "Add a 'webDriverConfiguration' object with browser settings"
                                .to_string()
                        }
                        _ => "Add a 'tests' object mapping module names to flows".to_string(),
                    },
                });
            }
        }

        let config: SuiteConfig = serde_json::from_value(value)?;
        debug!(modules = config.tests.len(), "parsed configuration");
        Ok(config)
    }
}

fn default_thread_count() -> u32 {
    1
}

fn default_parallel() -> String {
    "tests".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    500
}

/// Accept any JSON value for `threadCount`, defaulting to 1 when it is not
/// a usable non-negative integer.
fn de_thread_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or_else(default_thread_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_suite_name_default() {
        let module = ModuleConfig::default();
        assert_eq!(module.suite_name_for("login"), "Suite - login");
    }

    #[test]
    fn test_module_suite_name_explicit() {
        let module = ModuleConfig {
            suite_name: Some("Login Suite".to_string()),
            ..Default::default()
        };
        assert_eq!(module.suite_name_for("login"), "Login Suite");
    }

    #[test]
    fn test_flow_display_name_default() {
        let flow = FlowConfig::default();
        assert_eq!(flow.display_name("flowA"), "flowA");
    }

    #[test]
    fn test_flow_display_name_explicit() {
        let flow = FlowConfig {
            active: true,
            name: Some("Flow A".to_string()),
        };
        assert_eq!(flow.display_name("flowA"), "Flow A");
    }

    #[test]
    fn test_reserved_keys_not_flows() {
        let value = json!({
            "active": true,
            "suiteName": "Login Suite",
            "flowA": {"active": true}
        });
        let module: ModuleConfig = serde_json::from_value(value).unwrap();
        assert!(module.active);
        assert_eq!(module.suite_name.as_deref(), Some("Login Suite"));
        assert_eq!(module.flows.len(), 1);
        assert!(module.flows.contains_key("flowA"));
    }

    #[test]
    fn test_active_flows_filters_and_preserves_order() {
        let value = json!({
            "active": true,
            "b": {"active": true},
            "a": {"active": false},
            "c": {"active": true}
        });
        let module: ModuleConfig = serde_json::from_value(value).unwrap();
        let keys: Vec<&str> = module.active_flows().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_thread_count_non_numeric_defaults() {
        let value = json!({
            "webDriverConfiguration": {"threadCount": "lots"},
            "tests": {}
        });
        let config = SuiteConfig::from_value(value).unwrap();
        assert_eq!(config.web_driver.thread_count, 1);
    }

    #[test]
    fn test_thread_count_absent_defaults() {
        let value = json!({
            "webDriverConfiguration": {},
            "tests": {}
        });
        let config = SuiteConfig::from_value(value).unwrap();
        assert_eq!(config.web_driver.thread_count, 1);
        assert_eq!(config.web_driver.parallel, "tests");
    }

    #[test]
    fn test_missing_tests_key() {
        let value = json!({"webDriverConfiguration": {}});
        let err = SuiteConfig::from_value(value).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref field, .. } if field == "tests"));
    }

    #[test]
    fn test_missing_web_driver_key() {
        let value = json!({"tests": {}});
        let err = SuiteConfig::from_value(value).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { ref field, .. } if field == "webDriverConfiguration"
        ));
    }

    #[test]
    fn test_retry_policy_defaults() {
        let retry = RetryPolicy::default();
        assert_eq!(retry.max_attempts, 3);
        assert_eq!(retry.backoff_ms, 500);
        assert_eq!(retry.backoff(), std::time::Duration::from_millis(500));
    }
}

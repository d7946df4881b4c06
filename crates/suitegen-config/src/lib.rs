//! Configuration model for the suitegen suite-descriptor generator.
//!
//! The test runner is driven by a single JSON document,
//! `configuration/config.json`, that describes the browser session settings
//! and the set of test modules/flows to run. This crate provides the typed
//! model of that document, single-shot loading, and validation.
//!
//! Iteration order matters: the `tests` mapping and each module's flow
//! mapping are ordered maps, and suite descriptors are generated in the
//! order the keys appear in the JSON source.

pub mod config;
pub mod error;
pub mod validation;

// Re-export main types
pub use config::{FlowConfig, ModuleConfig, RetryPolicy, SuiteConfig, WebDriverConfiguration};
pub use error::{ConfigError, Result};

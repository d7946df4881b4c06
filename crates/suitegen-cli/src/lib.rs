//! Suitegen - TestNG suite-descriptor generator for the Micha E2E suite.
//!
//! The Micha portal's browser tests are described by a single JSON document
//! (`configuration/config.json`) listing test modules and their flows. This
//! crate regenerates the runner's XML suite descriptors from that document:
//! one `testng-{module}.xml` per active module plus a `suite-master.xml`
//! referencing them all, with stale descriptors of deactivated modules
//! removed.
//!
//! # Architecture
//!
//! - [`generator`] - The generation pass itself
//! - [`xml`] - Rendering of the two TestNG document shapes
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages

pub mod cli;
pub mod error;
pub mod generator;
pub mod logger;
pub mod ui;
pub mod xml;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
pub use generator::{GenerationReport, SuiteGenerator};

//! The suite-descriptor generation pass.
//!
//! A single synchronous sweep over the configuration: every active module
//! gets one `testng-{module}.xml` under `generados/`, every inactive module
//! has its stale descriptor deleted, and the run finishes by rewriting
//! `suite-master.xml` with references to the active modules in source order.
//!
//! Output files are fully regenerated each run. There is no rollback: a
//! failure aborts the pass but leaves already-written files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use suitegen_config::SuiteConfig;

use crate::error::{Result, ResultExt};
use crate::ui;
use crate::xml::{self, TestEntry};

/// Fixed configuration path, relative to the working directory.
pub const CONFIG_PATH: &str = "configuration/config.json";

/// Fixed output tree, relative to the working directory.
pub const SUITES_DIR: &str = "src/test/resources/suites";

/// Subdirectory of the suites tree holding per-module descriptors.
const GENERATED_DIR: &str = "generados";

/// Master descriptor file name.
const MASTER_FILE: &str = "suite-master.xml";

/// Paths touched by a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Per-module descriptors written, in module order.
    pub written: Vec<PathBuf>,
    /// Stale descriptors of inactive modules that were deleted.
    pub removed: Vec<PathBuf>,
    /// Path of the master descriptor.
    pub master: PathBuf,
}

/// Generates suite descriptors under a fixed output tree.
pub struct SuiteGenerator {
    suites_dir: PathBuf,
}

impl Default for SuiteGenerator {
    fn default() -> Self {
        Self::new(SUITES_DIR)
    }
}

impl SuiteGenerator {
    pub fn new(suites_dir: impl Into<PathBuf>) -> Self {
        Self {
            suites_dir: suites_dir.into(),
        }
    }

    /// Run the full generation pass against a configuration file.
    pub fn generate(&self, config_path: &Path) -> Result<GenerationReport> {
        let config = SuiteConfig::load(config_path)?;
        config.validate()?;
        self.generate_from(&config)
    }

    /// Run the generation pass against an already-loaded configuration.
    pub fn generate_from(&self, config: &SuiteConfig) -> Result<GenerationReport> {
        let generated_dir = self.suites_dir.join(GENERATED_DIR);
        fs::create_dir_all(&generated_dir).with_path(&generated_dir)?;

        let thread_count = config.web_driver.thread_count;
        let parallel = config.web_driver.parallel.as_str();
        debug!(thread_count, parallel, "starting generation pass");

        let mut report = GenerationReport {
            master: self.suites_dir.join(MASTER_FILE),
            ..Default::default()
        };
        let mut suite_files = Vec::new();

        for (module, descriptor) in &config.tests {
            let output_path = generated_dir.join(format!("testng-{module}.xml"));

            if !descriptor.active {
                info!(module, "module inactive, skipping generation");
                if output_path.exists() {
                    fs::remove_file(&output_path).with_path(&output_path)?;
                    ui::info(&format!("Removed stale descriptor: {}", output_path.display()));
                    report.removed.push(output_path);
                }
                continue;
            }

            let class_name = format!("{}{}", xml::TEST_CLASS_PREFIX, xml::capitalize(module));
            let tests: Vec<TestEntry> = descriptor
                .active_flows()
                .map(|(flow_key, flow)| TestEntry {
                    display_name: flow.display_name(flow_key).to_string(),
                    class_name: class_name.clone(),
                    method: flow_key.to_string(),
                })
                .collect();

            if tests.is_empty() {
                ui::warning(&format!("Module '{module}' has no active flows"));
            }

            let document = xml::suite_document(
                &descriptor.suite_name_for(module),
                parallel,
                thread_count,
                &tests,
            );
            fs::write(&output_path, document).with_path(&output_path)?;
            ui::success(&format!("Generated: {}", output_path.display()));
            debug!(module, flows = tests.len(), "wrote module descriptor");

            suite_files.push(format!("{GENERATED_DIR}/testng-{module}.xml"));
            report.written.push(output_path);
        }

        let master = xml::master_document(&suite_files);
        fs::write(&report.master, master).context("Failed to write master descriptor")?;
        ui::success(&format!("Updated: {}", report.master.display()));

        Ok(report)
    }
}

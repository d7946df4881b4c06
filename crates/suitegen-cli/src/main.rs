//! Suitegen - TestNG suite-descriptor generator.
//!
//! Entry point: reads the fixed configuration path and regenerates the
//! suite descriptors in one synchronous pass.

use std::path::Path;

use clap::Parser;
use miette::Result;
use suitegen_cli::{cli, error, generator, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = generator::SuiteGenerator::default()
        .generate(Path::new(generator::CONFIG_PATH))
        .map(|report| {
            if !args.quiet {
                ui::info(&format!(
                    "{} descriptor(s) generated, {} removed",
                    report.written.len(),
                    report.removed.len()
                ));
            }
        });

    result.map_err(error::cli_error_to_miette)
}

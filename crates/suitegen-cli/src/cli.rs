//! Command-line interface definition for suitegen.
//!
//! The tool is a one-shot generator with a fixed input path and output
//! tree, so there are no subcommands and no positional arguments; only the
//! global output controls are exposed.

use clap::Parser;

/// suitegen - TestNG suite-descriptor generator
#[derive(Parser, Debug)]
#[command(
    name = "suitegen",
    version,
    about = "Regenerates TestNG suite descriptors from configuration/config.json",
    long_about = "Reads configuration/config.json and regenerates the runner's suite\n\
                  descriptors under src/test/resources/suites: one testng-{module}.xml\n\
                  per active module plus suite-master.xml referencing them all.\n\
                  Descriptors of deactivated modules are removed."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["suitegen"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["suitegen", "--verbose", "--quiet"]).is_err());
    }
}

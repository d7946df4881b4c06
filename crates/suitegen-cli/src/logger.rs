//! Logging infrastructure for the suitegen CLI.
//!
//! Structured logging via the `tracing` ecosystem with three verbosity
//! tiers: `--verbose` (debug), `--quiet` (errors only), and the default
//! info level, overridable through `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("suitegen=debug,suitegen_cli=debug,suitegen_config=debug")
    } else if quiet {
        EnvFilter::new("suitegen=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("suitegen=info,suitegen_cli=info,suitegen_config=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

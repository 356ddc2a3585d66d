//! Diagnostic output.
//!
//! Everything goes to stderr through a `tracing` subscriber. At the default
//! level only per-entry failures are printed.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Overrides the `-v` flags when set, e.g. `RENAMER_LOG=renamer=debug`.
pub const LOG_ENV: &str = "RENAMER_LOG";

pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_for_verbosity(verbose))?,
    };

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

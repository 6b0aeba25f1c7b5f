//! Diagnostic logging to stderr with tracing.
//!
//! Stdout carries the report, so every log line goes to stderr. `OBELUS_LOG` takes an
//! `EnvFilter` directive and overrides the verbosity flag when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a filter directive such as `obelus=debug`.
pub const LOG_ENV: &str = "OBELUS_LOG";

#[must_use]
/// Default filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1);
    // A subscriber installed earlier stays in place.
    let _ = Registry::default().with(filter).with(stderr).try_init();
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;

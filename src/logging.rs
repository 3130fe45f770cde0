//! Logging bootstrap for the nagret binary
//!
//! Stdout carries the status line read by the monitoring framework, so every
//! log event is written to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a full `tracing` filter directive
pub const LOG_ENV_VAR: &str = "NAGRET_LOG";

/// Filter directive for a `-v` count, or `None` to keep the configured level.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Directive used when `NAGRET_LOG` is unset: `-v` beats the configured level.
pub fn effective_directive(configured: &str, verbose: u8) -> &str {
    verbosity_directive(verbose).unwrap_or(configured)
}

/// Build the filter: `NAGRET_LOG` wins, then `-v`, then the configured level.
pub fn build_filter(configured: &str, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::try_new(effective_directive(configured, verbose))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(configured: &str, verbose: u8) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(configured, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

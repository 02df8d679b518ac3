#![forbid(unsafe_code)]

//! Subscriber setup for hosts that do not install their own.
//!
//! The filter is read from `FOLIOFX_LOG`, then `RUST_LOG`, and defaults to
//! `info`. Both initializers write to stderr and return `false` when a global
//! subscriber is already set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "FOLIOFX_LOG";

/// The filter the initializers install.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Human-readable output.
pub fn init_fmt() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// One JSON object per event, with span close timings.
pub fn init_json() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

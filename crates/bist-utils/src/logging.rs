//! Logging and tracing utilities

use crate::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for a full-screen terminal application.
///
/// The terminal owns stdout/stderr while the UI is running, so log lines are
/// appended to `config.log_file` with ANSI colours disabled. `RUST_LOG`
/// overrides `config.log_filter`.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("tracing subscriber already initialized")
}

/// Build an `EnvFilter` from `RUST_LOG`, falling back to `default_directive`
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

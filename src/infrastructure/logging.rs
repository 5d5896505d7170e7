//! Logging initialization
//!
//! Console-only `tracing` setup. The log level is controlled through the
//! `RUST_LOG` environment variable and falls back to `info` when unset.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for binaries and embedding apps
///
/// Library code only emits events; calling this is the binary's decision.
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

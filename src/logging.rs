use anyhow::{anyhow, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Diagnostics always go to stderr: stdout carries the response bytes and
/// nothing else. The level comes from `RUST_LOG`, `warn` when unset.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

//! Telemetry initialisation for the submitter.
//!
//! Structured JSON logs only, written to stderr so that stdout carries nothing
//! but the gateway response.
//!
//! # Telemetry invariants
//!
//! - **No key material, ciphertext, or record content** in any log field.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber at `log_level`, unless `RUST_LOG` overrides it.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise submitter tracing subscriber: {e}"))
}

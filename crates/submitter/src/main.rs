//! `submitter` — one-shot payload submission binary.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Load the collection record from `RECORD_PATH`.
//! 4. Build the gateway client.
//! 5. Encrypt the record and post the envelope.
//! 6. Print the raw response status and body.

mod config;
mod crypto;
mod gateway;
mod record;
mod submit;
mod telemetry;

use anyhow::{Context, Result};
use tracing::{error, info};

use config::Config;
use gateway::GatewayClient;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        gateway = %cfg.gateway_url,
        "submitter starting"
    );

    // -----------------------------------------------------------------------
    // 3. Record
    // -----------------------------------------------------------------------
    let record = record::load_record(&cfg.record_path)
        .await
        .with_context(|| format!("failed to load record from {}", cfg.record_path))?;

    // -----------------------------------------------------------------------
    // 4. Gateway client
    // -----------------------------------------------------------------------
    let client = GatewayClient::from_config(&cfg).context("failed to build gateway client")?;

    // -----------------------------------------------------------------------
    // 5. Encrypt + submit
    // -----------------------------------------------------------------------
    let response = submit::submit_record(&record, cfg.encryption_key.as_bytes(), &client)
        .await
        .map_err(|e| {
            error!(code = e.code(), error = %e, "submission failed");
            e
        })
        .context("submission failed")?;

    // -----------------------------------------------------------------------
    // 6. Report
    // -----------------------------------------------------------------------
    println!("Response Status: {}", response.status_line());
    println!("Response Body: {}", response.body_text());

    Ok(())
}

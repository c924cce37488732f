//! Configuration loading and validation for the mock gateway.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated mock gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port to listen on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Path of the single POST endpoint.
    #[serde(default = "default_route_path")]
    pub route_path: String,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_route_path() -> String {
    "/PayinGateway/Partner/DREMakerV3".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build mock-gateway configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise mock-gateway configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.listen_port == 0 {
            anyhow::bail!("LISTEN_PORT must be non-zero");
        }
        if !self.route_path.starts_with('/') {
            anyhow::bail!("ROUTE_PATH must start with '/'");
        }
        if self.route_path == "/health" {
            anyhow::bail!("ROUTE_PATH must not shadow /health");
        }
        Ok(())
    }
}

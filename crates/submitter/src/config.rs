//! Configuration loading and validation for the submitter.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use std::fmt;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::gateway::client::parse_gateway_url;

/// Validated submitter configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Full HTTPS URL of the partner gateway endpoint. **Required.**
    pub gateway_url: String,

    /// API-management subscription key sent with every request. **Required.**
    pub subscription_key: String,

    /// Header carrying [`Config::subscription_key`].
    #[serde(default = "default_subscription_key_header")]
    pub subscription_key_header: String,

    /// Optional value for the `ClientId` request header. Blank means unset.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Whether to repeat [`Config::app_name`] in an `AppName` request header.
    #[serde(default = "default_send_app_name_header")]
    pub send_app_name_header: bool,

    /// Shared AES-256 key as raw text; must be exactly 32 bytes. **Required.**
    pub encryption_key: String,

    /// Application name placed in the envelope head.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Application version placed in the envelope head.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Path to the JSON collection record, or `-` for stdin. **Required.**
    pub record_path: String,

    /// Deadline (seconds) for the whole outbound request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_subscription_key_header() -> String {
    "Ocp-Apim-Subscription-Key".into()
}
fn default_send_app_name_header() -> bool {
    true
}
fn default_app_name() -> String {
    "DREPartner".into()
}
fn default_app_version() -> String {
    "1.0".into()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    ///
    /// Key length is left to the cipher so that it surfaces as
    /// `InvalidKeyLength` from the encryption step.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.gateway_url, "GATEWAY_URL")?;
        ensure_non_empty(&self.subscription_key, "SUBSCRIPTION_KEY")?;
        ensure_non_empty(&self.subscription_key_header, "SUBSCRIPTION_KEY_HEADER")?;
        ensure_non_empty(&self.encryption_key, "ENCRYPTION_KEY")?;
        ensure_non_empty(&self.record_path, "RECORD_PATH")?;
        ensure_non_empty(&self.app_name, "APP_NAME")?;

        parse_gateway_url(&self.gateway_url).context("GATEWAY_URL is invalid")?;
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        f.debug_struct("Config")
            .field("gateway_url", &self.gateway_url)
            .field("subscription_key", &"[REDACTED]")
            .field("subscription_key_header", &self.subscription_key_header)
            .field("client_id", &self.client_id)
            .field("send_app_name_header", &self.send_app_name_header)
            .field("encryption_key", &"[REDACTED]")
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("record_path", &self.record_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

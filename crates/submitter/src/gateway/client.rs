//! [`GatewayClient`]: single-shot envelope submission over HTTPS.

use std::time::Duration;

use bytes::Bytes;
use common::protocol::{Envelope, EnvelopeHead};
use common::SubmitError;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::Config;

/// Header carrying the optional partner client identifier.
const CLIENT_ID_HEADER: &str = "ClientId";

/// Header repeating the envelope's application name.
const APP_NAME_HEADER: &str = "AppName";

/// Parse the gateway URL, accepting only `http` and `https`.
///
/// # Errors
///
/// Returns [`SubmitError::RequestConstruction`] if the URL does not parse or
/// has another scheme.
pub fn parse_gateway_url(raw: &str) -> Result<Url, SubmitError> {
    let url = Url::parse(raw)
        .map_err(|e| SubmitError::RequestConstruction(format!("invalid gateway URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SubmitError::RequestConstruction(format!(
            "unsupported gateway URL scheme: {other}"
        ))),
    }
}

/// Raw gateway response, passed through unmodified.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl GatewayResponse {
    /// Status code plus canonical reason, e.g. `"500 Internal Server Error"`.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client bound to one gateway endpoint and one application identity.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    url: Url,
    head: EnvelopeHead,
    subscription_header: HeaderName,
    subscription_key: HeaderValue,
    client_id: Option<HeaderValue>,
    app_name: Option<HeaderValue>,
}

impl GatewayClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::RequestConstruction`] if the URL, a header name,
    /// or a header value is invalid, or the HTTP client cannot be built.
    pub fn from_config(cfg: &Config) -> Result<Self, SubmitError> {
        let url = parse_gateway_url(&cfg.gateway_url)?;

        let subscription_header = HeaderName::from_bytes(cfg.subscription_key_header.as_bytes())
            .map_err(|e| {
                SubmitError::RequestConstruction(format!("invalid subscription key header: {e}"))
            })?;

        let mut subscription_key = HeaderValue::from_str(&cfg.subscription_key).map_err(|_| {
            SubmitError::RequestConstruction("subscription key is not a valid header value".into())
        })?;
        subscription_key.set_sensitive(true);

        let client_id = cfg
            .client_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|_| {
                SubmitError::RequestConstruction("client id is not a valid header value".into())
            })?;

        let app_name = cfg
            .send_app_name_header
            .then(|| HeaderValue::from_str(&cfg.app_name))
            .transpose()
            .map_err(|_| {
                SubmitError::RequestConstruction("app name is not a valid header value".into())
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| SubmitError::RequestConstruction(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url,
            head: EnvelopeHead {
                app_name: cfg.app_name.clone(),
                app_version: cfg.app_version.clone(),
            },
            subscription_header,
            subscription_key,
            client_id,
            app_name,
        })
    }

    /// Wrap `encrypted` in the envelope and POST it.
    ///
    /// Any HTTP status, including 4xx and 5xx, is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::RequestConstruction`] if `encrypted` is empty or the request cannot be built.
    /// - [`SubmitError::Serialization`] if the envelope cannot be encoded.
    /// - [`SubmitError::Transport`] on connect failure, timeout, or body read failure.
    pub async fn submit(&self, encrypted: &str) -> Result<GatewayResponse, SubmitError> {
        if encrypted.is_empty() {
            return Err(SubmitError::RequestConstruction(
                "encrypted body must not be empty".into(),
            ));
        }

        let envelope = Envelope::new(self.head.clone(), encrypted);
        let payload = common::wire::to_vec(&envelope)?;
        let payload_len = payload.len();

        let mut builder = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(self.subscription_header.clone(), self.subscription_key.clone());
        if let Some(client_id) = &self.client_id {
            builder = builder.header(CLIENT_ID_HEADER, client_id.clone());
        }
        if let Some(app_name) = &self.app_name {
            builder = builder.header(APP_NAME_HEADER, app_name.clone());
        }
        let request = builder
            .body(payload)
            .build()
            .map_err(|e| SubmitError::RequestConstruction(e.to_string()))?;

        debug!(url = %self.url, bytes = payload_len, "posting envelope");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(format!("failed to read response body: {e}")))?;

        debug!(status = status.as_u16(), bytes = body.len(), "gateway responded");
        Ok(GatewayResponse { status, body })
    }
}

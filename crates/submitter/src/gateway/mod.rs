//! Outbound HTTP client for the partner payment gateway.
//!
//! # Responsibilities
//! - Wrap an already-encrypted payload in the fixed [`common::protocol::Envelope`].
//! - POST it with the content-type and subscription-key headers.
//! - Hand the raw status and body back to the caller without interpreting them.
//!
//! No retries: every failure is surfaced once as a [`common::SubmitError`].

pub mod client;

pub use client::{GatewayClient, GatewayResponse};

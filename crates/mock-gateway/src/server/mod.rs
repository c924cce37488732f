//! Axum HTTP server, routing, and middleware for the mock gateway.

pub mod handlers;
pub mod middleware;
pub mod router;

//! Axum router construction.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware};

/// Build the [`Router`] serving the canned response at `route_path` for every method.
pub fn build(route_path: &str) -> Router {
    Router::new()
        .route(route_path, any(handlers::submit))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
}

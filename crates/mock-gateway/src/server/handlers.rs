//! Axum request handlers for the mock gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

/// Body returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body returned for unknown routes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

/// The one response the mock ever gives for a submission.
pub fn canned_response() -> Value {
    json!({
        "head": {
            "status": "Success",
            "statusCode": "200",
            "message": "Request processed successfully"
        },
        "body": {
            "data": ""
        }
    })
}

/// `<route>` (any method) — accept any body and answer with [`canned_response`].
///
/// The body is neither parsed nor logged; only its length is recorded.
pub async fn submit(body: Bytes) -> Response {
    info!(bytes = body.len(), "submission received");
    (StatusCode::OK, Json(canned_response())).into_response()
}

/// `GET /health` — liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse {
        code: "not_found",
        message: "the requested resource does not exist",
    };
    (StatusCode::NOT_FOUND, Json(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn submit_returns_canned_response_for_any_body() {
        let app = Router::new().route("/submit", post(submit));
        for payload in [
            &b"not json at all"[..],
            &b""[..],
            &br#"{"body":{"data":"abc"}}"#[..],
        ] {
            let req = Request::builder()
                .method("POST")
                .uri("/submit")
                .body(Body::from(payload.to_vec()))
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(body_json(resp).await, canned_response());
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = health().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn not_found_has_error_body() {
        let resp = not_found().await.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["code"], "not_found");
    }

    #[test]
    fn canned_response_has_envelope_shape() {
        let value = canned_response();
        assert!(value["head"].is_object());
        assert!(value["body"]["data"].is_string());
    }
}

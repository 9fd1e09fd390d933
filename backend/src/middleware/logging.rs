use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use super::request_id::RequestId;

/// Middleware that records a diagnostic line whenever a handler answers with
/// an HTTP status in the 4xx or 5xx range.
pub async fn log_error_responses(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req.extensions().get::<RequestId>().cloned();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            status = status.as_u16(),
            method = %method,
            uri = %uri,
            latency_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_ref().map(|id| id.0.as_str()),
            "request rejected"
        );
    }

    response
}

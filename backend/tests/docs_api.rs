use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use gatecheck_backend::{docs, handlers};
use serde_json::Value;
use tower::ServiceExt;

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn openapi_document_lists_the_auth_paths() {
    let app = Router::new().route("/api/docs/openapi.json", get(docs::openapi_json));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = response_json(response).await;
    assert!(doc["paths"]["/api/auth/signin"]["post"].is_object());
    assert!(doc["paths"]["/api/auth/signup"]["post"].is_object());
    assert!(doc["paths"]["/api/health"]["get"].is_object());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = Router::new().route("/api/health", get(handlers::health::health));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

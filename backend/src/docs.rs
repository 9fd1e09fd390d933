#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use axum::Json;
use utoipa::OpenApi;

use crate::models::auth::{SigninAck, SigninBody, SignupAck, SignupBody};

#[derive(OpenApi)]
#[openapi(
    paths(signin_doc, signup_doc, health_doc),
    components(schemas(SigninBody, SigninAck, SignupBody, SignupAck)),
    tags(
        (name = "Auth", description = "Signin/signup payload validation"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninBody,
    responses(
        (status = 200, description = "Payload accepted", body = SigninAck),
        (status = 400, description = "Validation failed")
    ),
    tag = "Auth"
)]
fn signin_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupBody,
    responses(
        (status = 200, description = "Payload accepted", body = SignupAck),
        (status = 400, description = "Validation failed")
    ),
    tag = "Auth"
)]
fn signup_doc() {}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up")),
    tag = "Health"
)]
fn health_doc() {}

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    error::AppError,
    models::auth::{SigninAck, SigninBody, SignupAck, SignupBody},
    state::AppState,
};

/// Accepts a signin payload once it clears the route's validation pipe.
///
/// Credential checks live upstream of this service; its contract ends at
/// answering with the validated identity.
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<SigninAck>, AppError> {
    let validated = state.pipes.signin.transform(payload)?;
    // The pipe already proved the record matches the body shape.
    let body: SigninBody = serde_json::from_value(validated).map_err(anyhow::Error::new)?;
    Ok(Json(SigninAck::from(body)))
}

/// Accepts a signup payload once it clears the route's validation pipe.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<SignupAck>, AppError> {
    let validated = state.pipes.signup.transform(payload)?;
    let body: SignupBody = serde_json::from_value(validated).map_err(anyhow::Error::new)?;
    Ok(Json(SignupAck::from(body)))
}

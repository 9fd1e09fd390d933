pub mod auth;
pub mod health;

pub use auth::*;
pub use health::*;

use crate::error::AppError;

/// Fallback for unmatched routes, keeping the standard error envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

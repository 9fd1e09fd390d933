//! Request-validation service: payload schemas, the validation pipe that
//! runs them, and the HTTP surface that mounts a pipe per route.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pipes;
pub mod schema;
pub mod state;
pub mod validation;

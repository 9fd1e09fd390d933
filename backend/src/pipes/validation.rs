//! The validation pipe that gates request records before handlers run.

use std::sync::Arc;

use serde_json::Value;

use crate::error::AppError;
use crate::schema::{Outcome, Validator};

/// Runs a request record through an injected schema check.
///
/// The schema is supplied at construction and never changes afterwards; the
/// pipe holds no other state, so one instance serves any number of calls.
#[derive(Clone)]
pub struct ValidationPipe {
    schema: Arc<dyn Validator>,
}

impl ValidationPipe {
    pub fn new<V>(schema: V) -> Self
    where
        V: Validator + 'static,
    {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// Returns the record unchanged when it passes the schema check.
    ///
    /// A failing record is rejected with a client error: a field-listing
    /// message when the schema reported which paths failed, a generic one
    /// when it did not. The rejection always reaches the caller; nothing is
    /// retried or swallowed here.
    pub fn transform(&self, input: Value) -> Result<Value, AppError> {
        match self.schema.validate(&input) {
            Outcome::Valid => Ok(input),
            Outcome::Invalid { fields } => Err(AppError::BadRequest(field_message(&fields))),
            Outcome::Rejected => Err(AppError::BadRequest("Validation failed".to_string())),
        }
    }
}

fn field_message(fields: &[String]) -> String {
    let listed: Vec<String> = fields.iter().map(|field| format!("$input.{field}")).collect();
    format!("Validation failed for {}", listed.join(", "))
}

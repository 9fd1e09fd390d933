//! Schema checks for untyped request records.
//!
//! A [`Validator`] inspects a `serde_json::Value` and answers with a tagged
//! [`Outcome`]. Route pipes hold one validator each; see
//! [`crate::pipes::ValidationPipe`] for how outcomes turn into responses.

pub mod record;
pub mod typed;

pub use record::{FieldKind, RecordSchema};
pub use typed::TypedSchema;

use serde_json::Value;

/// Result of running a schema check against an input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record satisfies the schema.
    Valid,
    /// The record failed; `fields` names the offending field paths in the
    /// order the schema reported them.
    Invalid { fields: Vec<String> },
    /// The record failed without structured field detail.
    Rejected,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

/// A schema check over an untyped JSON record.
///
/// Implementations are configured once and treated as immutable afterwards;
/// `validate` must not retain or mutate anything across calls.
pub trait Validator: Send + Sync {
    fn validate(&self, input: &Value) -> Outcome;
}

/// Plain predicates act as validators that carry no field-level detail.
impl<F> Validator for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(&self, input: &Value) -> Outcome {
        if self(input) {
            Outcome::Valid
        } else {
            Outcome::Rejected
        }
    }
}

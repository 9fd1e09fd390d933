//! Declarative field-rule schemas for JSON objects.

use serde_json::Value;
use validator::ValidateEmail;

use super::{Outcome, Validator};

/// Accepted shapes for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON string.
    Text,
    /// A non-empty string of ASCII letters.
    Alphabetic,
    /// Any JSON number.
    Number,
    /// An integer of arbitrary size: an integer-valued JSON number, or a
    /// string of ASCII digits for values a JSON number cannot carry.
    BigInt,
    /// A string in email format.
    Email,
}

#[derive(Debug, Clone)]
struct FieldRule {
    path: String,
    kind: FieldKind,
    required: bool,
}

/// Schema for a JSON object built from an ordered list of field rules.
///
/// Rules are checked in declaration order and failing field paths are
/// reported in that same order, without deduplication.
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    rules: Vec<FieldRule>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule for a field that must be present.
    pub fn field(mut self, path: &str, kind: FieldKind) -> Self {
        self.rules.push(FieldRule {
            path: path.to_string(),
            kind,
            required: true,
        });
        self
    }

    /// Adds a rule for a field that may be absent or null.
    pub fn optional_field(mut self, path: &str, kind: FieldKind) -> Self {
        self.rules.push(FieldRule {
            path: path.to_string(),
            kind,
            required: false,
        });
        self
    }
}

fn matches_kind(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Alphabetic => value
            .as_str()
            .is_some_and(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())),
        FieldKind::Number => value.is_number(),
        FieldKind::BigInt => match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
            _ => false,
        },
        FieldKind::Email => value.as_str().is_some_and(|s| s.validate_email()),
    }
}

impl Validator for RecordSchema {
    fn validate(&self, input: &Value) -> Outcome {
        let Some(object) = input.as_object() else {
            // A non-object record has no field paths to report.
            return Outcome::Rejected;
        };

        let mut fields = Vec::new();
        for rule in &self.rules {
            match object.get(&rule.path) {
                None | Some(Value::Null) => {
                    if rule.required {
                        fields.push(rule.path.clone());
                    }
                }
                Some(value) => {
                    if !matches_kind(rule.kind, value) {
                        fields.push(rule.path.clone());
                    }
                }
            }
        }

        if fields.is_empty() {
            Outcome::Valid
        } else {
            Outcome::Invalid { fields }
        }
    }
}

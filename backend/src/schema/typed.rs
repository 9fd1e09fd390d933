//! Bridges typed request bodies into the untyped schema-check seam.

use std::collections::HashSet;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use super::{Outcome, Validator};

/// Checks a record against a typed body's derive rules.
///
/// The `validator` crate reports errors in an unordered map, so the declared
/// field order is supplied at construction and failing fields are reported in
/// that order. A record that does not deserialize into `T` at all carries no
/// structured field detail and maps to [`Outcome::Rejected`].
pub struct TypedSchema<T> {
    field_order: &'static [&'static str],
    _body: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    pub fn new(field_order: &'static [&'static str]) -> Self {
        Self {
            field_order,
            _body: PhantomData,
        }
    }
}

impl<T> Validator for TypedSchema<T>
where
    T: DeserializeOwned + Validate,
{
    fn validate(&self, input: &Value) -> Outcome {
        let body: T = match serde_json::from_value(input.clone()) {
            Ok(body) => body,
            Err(_) => return Outcome::Rejected,
        };

        match body.validate() {
            Ok(()) => Outcome::Valid,
            Err(errors) => {
                let failed: HashSet<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                let fields: Vec<String> = self
                    .field_order
                    .iter()
                    .filter(|field| failed.contains(**field))
                    .map(|field| field.to_string())
                    .collect();
                if fields.is_empty() {
                    // Errors outside the declared fields (nested or
                    // struct-level) have no path to report.
                    Outcome::Rejected
                } else {
                    Outcome::Invalid { fields }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1))]
        password: String,
    }

    fn probe_schema() -> TypedSchema<Probe> {
        TypedSchema::new(&["email", "password"])
    }

    #[test]
    fn conforming_record_is_valid() {
        let outcome = probe_schema().validate(&json!({
            "email": "test@test.com",
            "password": "secret",
        }));
        assert!(outcome.is_valid());
    }

    #[test]
    fn derive_failures_follow_declared_order() {
        let outcome = probe_schema().validate(&json!({
            "email": "wrong-email",
            "password": "",
        }));
        assert_eq!(
            outcome,
            Outcome::Invalid {
                fields: vec!["email".to_string(), "password".to_string()]
            }
        );
    }

    #[test]
    fn undeserializable_record_is_rejected_without_detail() {
        let outcome = probe_schema().validate(&json!({"email": "test@test.com"}));
        assert_eq!(outcome, Outcome::Rejected);
    }
}

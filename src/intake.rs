//! The unified intake pipeline: deserialize, validate, stamp, store.
//!
//! Both submission endpoints are thin wrappers over [`submit`], parameterized
//! by form type and storage backend.

use crate::error::{FieldError, IntakeError, Result};
use crate::store::IntakeStore;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Run one submission through the pipeline and hand back the stored record.
///
/// Malformed payloads and constraint violations both surface as
/// [`IntakeError::Validation`]; nothing reaches the store unvalidated.
pub async fn submit<S>(store: &S, payload: Value) -> Result<S::Record>
where
    S: IntakeStore + ?Sized,
    S::Form: DeserializeOwned + Validate,
{
    let form: S::Form = serde_json::from_value(payload).map_err(|e| {
        IntakeError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: e.to_string(),
        }])
    })?;

    form.validate()
        .map_err(|e| IntakeError::Validation(field_errors(&e)))?;

    store.create(form, Utc::now()).await
}

/// Flatten validator output into per-field messages, with field names in the
/// wire's camelCase spelling. Sorted for deterministic responses.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, violations) in errors.field_errors() {
        for violation in violations.iter() {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            out.push(FieldError {
                field: camel_case(field),
                message,
            });
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

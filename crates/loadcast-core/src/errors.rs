//! Validation error types surfaced to API clients.
//!
//! Inference-side errors are defined in `loadcast-model`; the two kinds
//! converge in the server crate where the failure-reporting policy lives
//! (validation errors carry full field detail, inference errors stay opaque
//! to the caller).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    /// Name of the offending request field ("body" for malformed JSON).
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Request rejected at the boundary. Carries every failing field; a single
/// invalid field rejects the whole request with no partial processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Wrap a body-level failure (malformed JSON, wrong types, unknown
    /// fields) as a single-entry error list.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new("body", message)],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

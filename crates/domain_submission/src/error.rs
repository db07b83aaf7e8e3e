//! Submission domain errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A user-correctable problem with one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field key as the form knows it: `"name"` or `"phone"`
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur while packaging a submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Contact identity failed validation; the flow must not proceed
    #[error("Contact validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
}

impl SubmissionError {
    /// Field errors carried by this error, if any
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SubmissionError::Validation(errors) => errors,
        }
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

use serde::Serialize;
use thiserror::Error;

/// One violated constraint on one input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_string(), message: message.to_string() }
    }

    fn summarize(errors: &[FieldError]) -> String {
        errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", FieldError::summarize(.0))]
    Validation(Vec<FieldError>),
}

impl ModelError {
    /// Field-level details when this is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        let ModelError::Validation(errors) = self;
        errors
    }
}

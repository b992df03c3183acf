//! Unified error types for the domain layer
//!
//! Validation of books and characters against the limits the backend enforces.
//! The client itself never rejects a draft with these; the simulated backend
//! uses them to answer the way the live one does.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value is outside the limits of the model
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Parse error (for enum-like strings)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a single field.
    ///
    /// The display form is `"<field>: <message>"`, which is what the backend
    /// puts in the `error` field of its error envelope.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_field() {
        let err = DomainError::validation("name", "must not be empty");
        assert_eq!(err.to_string(), "name: must not be empty");
    }
}

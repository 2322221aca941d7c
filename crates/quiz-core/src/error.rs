//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No quiz exists with the given identifier.
    #[error("there is no quiz with id={0}")]
    QuizNotFound(i64),

    /// One or more field validations failed. Each entry is a user-facing
    /// message.
    #[error("validation error: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Returns the validation messages, or an empty slice for other variants.
    #[must_use]
    pub fn validation_messages(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }
}

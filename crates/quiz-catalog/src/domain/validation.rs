//! Field validation for quiz submissions.

use quiz_core::error::DomainError;
use quiz_core::quiz::QuizFields;

/// Message reported for a blank question.
pub const QUESTION_EMPTY: &str = "Question must not be empty.";
/// Message reported for a blank answer.
pub const ANSWER_EMPTY: &str = "Answer must not be empty.";

/// Checks that both question and answer contain something other than
/// whitespace.
///
/// # Errors
///
/// Returns `DomainError::Validation` listing every failing field, question
/// first.
pub fn validate(fields: &QuizFields) -> Result<(), DomainError> {
    let mut messages = Vec::new();
    if fields.question.trim().is_empty() {
        messages.push(QUESTION_EMPTY.to_owned());
    }
    if fields.answer.trim().is_empty() {
        messages.push(ANSWER_EMPTY.to_owned());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(messages))
    }
}

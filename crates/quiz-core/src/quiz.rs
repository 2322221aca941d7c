//! The quiz record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Database-assigned identifier.
    pub id: i64,
    /// The question shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// When the quiz was created.
    pub created_at: DateTime<Utc>,
    /// When the quiz was last edited.
    pub updated_at: DateTime<Utc>,
}

/// The editable fields of a quiz, as submitted through a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizFields {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
}

impl QuizFields {
    /// Creates a new set of quiz fields.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

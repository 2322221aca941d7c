//! Commands for the catalog context.

use quiz_core::quiz::QuizFields;
use uuid::Uuid;

/// Command to create a new quiz.
#[derive(Debug, Clone)]
pub struct CreateQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The submitted question and answer.
    pub fields: QuizFields,
}

/// Command to replace the question and answer of an existing quiz.
#[derive(Debug, Clone)]
pub struct UpdateQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quiz being edited.
    pub quiz_id: i64,
    /// The submitted question and answer.
    pub fields: QuizFields,
}

/// Command to delete a quiz.
#[derive(Debug, Clone)]
pub struct DeleteQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quiz being deleted.
    pub quiz_id: i64,
}

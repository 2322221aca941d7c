//! Query handlers for the catalog context.
//!
//! These return read-only view DTOs for the web layer.

use chrono::{DateTime, Utc};
use quiz_core::error::DomainError;
use quiz_core::quiz::Quiz;
use quiz_core::repository::QuizRepository;
use serde::Serialize;

/// Read-only view of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    /// The quiz identifier.
    pub id: i64,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// When the quiz was created.
    pub created_at: DateTime<Utc>,
    /// When the quiz was last edited.
    pub updated_at: DateTime<Utc>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            question: quiz.question,
            answer: quiz.answer,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

/// Lists every quiz, ordered by id.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_quizzes(repo: &dyn QuizRepository) -> Result<Vec<QuizView>, DomainError> {
    let quizzes = repo.list().await?;
    Ok(quizzes.into_iter().map(QuizView::from).collect())
}

/// Retrieves a quiz by id.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if no quiz has the id.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_quiz_by_id(id: i64, repo: &dyn QuizRepository) -> Result<QuizView, DomainError> {
    repo.find(id)
        .await?
        .map(QuizView::from)
        .ok_or(DomainError::QuizNotFound(id))
}

//! Direct play of a single quiz.

use quiz_core::error::DomainError;
use quiz_core::quiz::Quiz;
use quiz_core::repository::QuizRepository;

use crate::domain::answer::is_correct;

/// Outcome of answering a single quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The quiz that was answered.
    pub quiz: Quiz,
    /// The answer as submitted.
    pub answer: String,
    /// Whether the answer matched.
    pub correct: bool,
}

/// Loads a quiz for playing.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist.
pub async fn load_quiz(quiz_id: i64, repo: &dyn QuizRepository) -> Result<Quiz, DomainError> {
    repo.find(quiz_id)
        .await?
        .ok_or(DomainError::QuizNotFound(quiz_id))
}

/// Checks `answer` against the stored answer of `quiz_id`.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist.
pub async fn check_answer(
    quiz_id: i64,
    answer: &str,
    repo: &dyn QuizRepository,
) -> Result<CheckResult, DomainError> {
    let quiz = load_quiz(quiz_id, repo).await?;
    let correct = is_correct(answer, &quiz.answer);

    Ok(CheckResult {
        quiz,
        answer: answer.to_owned(),
        correct,
    })
}

//! Command handlers for the catalog context.
//!
//! Each handler validates the submission, then persists it through the
//! repository.

use quiz_core::clock::Clock;
use quiz_core::error::DomainError;
use quiz_core::repository::QuizRepository;
use tracing::info;

use crate::application::query_handlers::QuizView;
use crate::domain::commands::{CreateQuiz, DeleteQuiz, UpdateQuiz};
use crate::domain::validation::validate;

/// Handles the `CreateQuiz` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the question or answer is blank, or
/// `DomainError::Infrastructure` if persisting fails.
pub async fn handle_create_quiz(
    command: &CreateQuiz,
    clock: &dyn Clock,
    repo: &dyn QuizRepository,
) -> Result<QuizView, DomainError> {
    validate(&command.fields)?;

    let quiz = repo.insert(&command.fields, clock.now()).await?;

    info!(correlation_id = %command.correlation_id, quiz_id = quiz.id, "quiz created");
    Ok(quiz.into())
}

/// Handles the `UpdateQuiz` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the question or answer is blank,
/// `DomainError::QuizNotFound` if the quiz does not exist, or
/// `DomainError::Infrastructure` if persisting fails.
pub async fn handle_update_quiz(
    command: &UpdateQuiz,
    clock: &dyn Clock,
    repo: &dyn QuizRepository,
) -> Result<QuizView, DomainError> {
    validate(&command.fields)?;

    let quiz = repo
        .update(command.quiz_id, &command.fields, clock.now())
        .await?;

    info!(correlation_id = %command.correlation_id, quiz_id = quiz.id, "quiz edited");
    Ok(quiz.into())
}

/// Handles the `DeleteQuiz` command.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist, or
/// `DomainError::Infrastructure` if the delete fails.
pub async fn handle_delete_quiz(
    command: &DeleteQuiz,
    repo: &dyn QuizRepository,
) -> Result<(), DomainError> {
    repo.delete(command.quiz_id).await?;

    info!(correlation_id = %command.correlation_id, quiz_id = command.quiz_id, "quiz deleted");
    Ok(())
}

//! Default quiz set, inserted into an empty catalog on request.

use quiz_core::clock::Clock;
use quiz_core::error::DomainError;
use quiz_core::quiz::QuizFields;
use quiz_core::repository::QuizRepository;
use tracing::info;

/// Question/answer pairs of the default catalog.
pub const DEFAULT_QUIZZES: &[(&str, &str)] = &[
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Inserts `DEFAULT_QUIZZES` if the catalog is empty. Returns the number of
/// quizzes inserted, which is zero when quizzes already exist.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn seed_default_quizzes(
    clock: &dyn Clock,
    repo: &dyn QuizRepository,
) -> Result<usize, DomainError> {
    if repo.count_excluding(&[]).await? > 0 {
        return Ok(0);
    }

    let now = clock.now();
    for (question, answer) in DEFAULT_QUIZZES {
        repo.insert(&QuizFields::new(*question, *answer), now).await?;
    }

    info!(count = DEFAULT_QUIZZES.len(), "seeded default quizzes");
    Ok(DEFAULT_QUIZZES.len())
}

//! Quiz repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::quiz::{Quiz, QuizFields};

/// Repository trait for reading and writing quizzes.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Load all quizzes, ordered by id.
    async fn list(&self) -> Result<Vec<Quiz>, DomainError>;

    /// Load a single quiz, or `None` if it does not exist.
    async fn find(&self, id: i64) -> Result<Option<Quiz>, DomainError>;

    /// Count the quizzes whose id is not in `excluded`.
    async fn count_excluding(&self, excluded: &[i64]) -> Result<i64, DomainError>;

    /// Load the quiz at position `offset` among the quizzes whose id is not
    /// in `excluded`, ordered by id.
    async fn nth_excluding(
        &self,
        excluded: &[i64],
        offset: i64,
    ) -> Result<Option<Quiz>, DomainError>;

    /// Persist a new quiz. `now` becomes both timestamps.
    async fn insert(&self, fields: &QuizFields, now: DateTime<Utc>) -> Result<Quiz, DomainError>;

    /// Overwrite the question and answer of an existing quiz.
    ///
    /// Returns `DomainError::QuizNotFound` if no quiz has the given id.
    async fn update(
        &self,
        id: i64,
        fields: &QuizFields,
        now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError>;

    /// Delete a quiz.
    ///
    /// Returns `DomainError::QuizNotFound` if no quiz has the given id.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

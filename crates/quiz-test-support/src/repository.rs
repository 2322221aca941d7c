//! Test repositories: `QuizRepository` doubles for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::error::DomainError;
use quiz_core::quiz::{Quiz, QuizFields};
use quiz_core::repository::QuizRepository;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Quiz>,
    next_id: i64,
}

/// A quiz repository held in memory. Ids are assigned sequentially from 1
/// and rows stay ordered by id, mirroring the `PostgreSQL` implementation.
#[derive(Debug, Default)]
pub struct InMemoryQuizRepository {
    table: Mutex<Table>,
}

impl InMemoryQuizRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given question/answer
    /// pairs, assigned ids `1..=n` in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_quizzes(pairs: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.table.lock().unwrap();
            for (question, answer) in pairs {
                table.next_id += 1;
                let id = table.next_id;
                table.rows.push(Quiz {
                    id,
                    question: (*question).to_owned(),
                    answer: (*answer).to_owned(),
                    created_at: crate::fixed_now(),
                    updated_at: crate::fixed_now(),
                });
            }
        }
        repo
    }

    /// Returns a snapshot of all stored quizzes.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn snapshot(&self) -> Vec<Quiz> {
        self.table.lock().unwrap().rows.clone()
    }

    fn remaining(table: &Table, excluded: &[i64]) -> Vec<Quiz> {
        table
            .rows
            .iter()
            .filter(|quiz| !excluded.contains(&quiz.id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn list(&self) -> Result<Vec<Quiz>, DomainError> {
        Ok(self.snapshot())
    }

    async fn find(&self, id: i64) -> Result<Option<Quiz>, DomainError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|quiz| quiz.id == id).cloned())
    }

    #[allow(clippy::cast_possible_wrap)]
    async fn count_excluding(&self, excluded: &[i64]) -> Result<i64, DomainError> {
        let table = self.table.lock().unwrap();
        Ok(Self::remaining(&table, excluded).len() as i64)
    }

    async fn nth_excluding(
        &self,
        excluded: &[i64],
        offset: i64,
    ) -> Result<Option<Quiz>, DomainError> {
        let table = self.table.lock().unwrap();
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(None);
        };
        Ok(Self::remaining(&table, excluded).into_iter().nth(offset))
    }

    async fn insert(&self, fields: &QuizFields, now: DateTime<Utc>) -> Result<Quiz, DomainError> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let quiz = Quiz {
            id: table.next_id,
            question: fields.question.clone(),
            answer: fields.answer.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(
        &self,
        id: i64,
        fields: &QuizFields,
        now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError> {
        let mut table = self.table.lock().unwrap();
        let quiz = table
            .rows
            .iter_mut()
            .find(|quiz| quiz.id == id)
            .ok_or(DomainError::QuizNotFound(id))?;
        quiz.question.clone_from(&fields.question);
        quiz.answer.clone_from(&fields.answer);
        quiz.updated_at = now;
        Ok(quiz.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|quiz| quiz.id != id);
        if table.rows.len() == before {
            return Err(DomainError::QuizNotFound(id));
        }
        Ok(())
    }
}

/// A quiz repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingQuizRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl QuizRepository for FailingQuizRepository {
    async fn list(&self) -> Result<Vec<Quiz>, DomainError> {
        Err(connection_refused())
    }

    async fn find(&self, _id: i64) -> Result<Option<Quiz>, DomainError> {
        Err(connection_refused())
    }

    async fn count_excluding(&self, _excluded: &[i64]) -> Result<i64, DomainError> {
        Err(connection_refused())
    }

    async fn nth_excluding(
        &self,
        _excluded: &[i64],
        _offset: i64,
    ) -> Result<Option<Quiz>, DomainError> {
        Err(connection_refused())
    }

    async fn insert(
        &self,
        _fields: &QuizFields,
        _now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError> {
        Err(connection_refused())
    }

    async fn update(
        &self,
        _id: i64,
        _fields: &QuizFields,
        _now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}

/// Wraps an `InMemoryQuizRepository` so that the first `misses` calls to
/// `nth_excluding` find nothing, as if the row had been deleted between the
/// count and the fetch.
#[derive(Debug)]
pub struct VanishingQuizRepository {
    inner: InMemoryQuizRepository,
    misses: AtomicUsize,
}

impl VanishingQuizRepository {
    /// Create a repository over `inner` whose next `misses` fetches miss.
    #[must_use]
    pub fn new(inner: InMemoryQuizRepository, misses: usize) -> Self {
        Self {
            inner,
            misses: AtomicUsize::new(misses),
        }
    }

    /// Fetches still to miss.
    #[must_use]
    pub fn misses_left(&self) -> usize {
        self.misses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuizRepository for VanishingQuizRepository {
    async fn list(&self) -> Result<Vec<Quiz>, DomainError> {
        self.inner.list().await
    }

    async fn find(&self, id: i64) -> Result<Option<Quiz>, DomainError> {
        self.inner.find(id).await
    }

    async fn count_excluding(&self, excluded: &[i64]) -> Result<i64, DomainError> {
        self.inner.count_excluding(excluded).await
    }

    async fn nth_excluding(
        &self,
        excluded: &[i64],
        offset: i64,
    ) -> Result<Option<Quiz>, DomainError> {
        let missed = self
            .misses
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if missed {
            return Ok(None);
        }
        self.inner.nth_excluding(excluded, offset).await
    }

    async fn insert(&self, fields: &QuizFields, now: DateTime<Utc>) -> Result<Quiz, DomainError> {
        self.inner.insert(fields, now).await
    }

    async fn update(
        &self,
        id: i64,
        fields: &QuizFields,
        now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError> {
        self.inner.update(id, fields, now).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.inner.delete(id).await
    }
}

//! `PostgreSQL` implementation of the `QuizRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use quiz_core::error::DomainError;
use quiz_core::quiz::{Quiz, QuizFields};
use quiz_core::repository::QuizRepository;

/// Row shape of the `quizzes` table.
#[derive(Debug, sqlx::FromRow)]
struct QuizRow {
    id: i64,
    question: String,
    answer: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<QuizRow> for Quiz {
    fn from(row: QuizRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn infrastructure(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(format!("quiz query failed: {err}"))
}

/// PostgreSQL-backed quiz repository.
#[derive(Debug, Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    /// Creates a new `PgQuizRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn list(&self) -> Result<Vec<Quiz>, DomainError> {
        let rows: Vec<QuizRow> = sqlx::query_as(
            "SELECT id, question, answer, created_at, updated_at FROM quizzes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(rows.into_iter().map(Quiz::from).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Quiz>, DomainError> {
        let row: Option<QuizRow> = sqlx::query_as(
            "SELECT id, question, answer, created_at, updated_at FROM quizzes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(row.map(Quiz::from))
    }

    async fn count_excluding(&self, excluded: &[i64]) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM quizzes WHERE NOT (id = ANY($1))")
            .bind(excluded)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))
    }

    async fn nth_excluding(
        &self,
        excluded: &[i64],
        offset: i64,
    ) -> Result<Option<Quiz>, DomainError> {
        let row: Option<QuizRow> = sqlx::query_as(
            "SELECT id, question, answer, created_at, updated_at FROM quizzes \
             WHERE NOT (id = ANY($1)) ORDER BY id OFFSET $2 LIMIT 1",
        )
        .bind(excluded)
        .bind(offset)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(row.map(Quiz::from))
    }

    async fn insert(&self, fields: &QuizFields, now: DateTime<Utc>) -> Result<Quiz, DomainError> {
        let row: QuizRow = sqlx::query_as(
            "INSERT INTO quizzes (question, answer, created_at, updated_at) \
             VALUES ($1, $2, $3, $3) \
             RETURNING id, question, answer, created_at, updated_at",
        )
        .bind(&fields.question)
        .bind(&fields.answer)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        debug!(quiz_id = row.id, "inserted quiz");
        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        fields: &QuizFields,
        now: DateTime<Utc>,
    ) -> Result<Quiz, DomainError> {
        let row: Option<QuizRow> = sqlx::query_as(
            "UPDATE quizzes SET question = $2, answer = $3, updated_at = $4 \
             WHERE id = $1 \
             RETURNING id, question, answer, created_at, updated_at",
        )
        .bind(id)
        .bind(&fields.question)
        .bind(&fields.answer)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        row.map(Quiz::from).ok_or(DomainError::QuizNotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::QuizNotFound(id));
        }
        debug!(quiz_id = id, "deleted quiz");
        Ok(())
    }
}

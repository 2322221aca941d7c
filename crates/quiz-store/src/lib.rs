//! Quiz Store: `PostgreSQL` persistence for quizzes.

pub mod pg_quiz_repository;

pub use pg_quiz_repository::PgQuizRepository;

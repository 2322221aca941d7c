//! Read-only JSON API mounted at `/api`.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use quiz_catalog::application::query_handlers::{self, QuizView};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /quizzes
#[instrument(skip(state))]
async fn list_quizzes(State(state): State<AppState>) -> Result<Json<Vec<QuizView>>, ApiError> {
    let quizzes = query_handlers::list_quizzes(&*state.quiz_repository).await?;
    Ok(Json(quizzes))
}

/// GET /quizzes/{id}
#[instrument(skip(state))]
async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<QuizView>, ApiError> {
    let quiz = query_handlers::get_quiz_by_id(id, &*state.quiz_repository).await?;
    Ok(Json(quiz))
}

/// Returns the JSON API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quizzes", get(list_quizzes))
        .route("/quizzes/{id}", get(get_quiz))
}

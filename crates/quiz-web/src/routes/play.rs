//! Play pages: direct play of one quiz and the random play-through.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::{Router, routing::get};
use quiz_play::application::direct_play;
use quiz_play::application::random_play::{RandomRound, check_random_answer, next_random_round};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::PageError;
use crate::session::Session;
use crate::state::AppState;
use crate::views;

/// `?answer=` query of the play and check pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnswerQuery {
    /// The player's answer; empty when absent.
    pub answer: String,
}

/// GET /quizzes/{id}/play
#[instrument(skip(state, session))]
async fn play(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Query(query): Query<AnswerQuery>,
) -> Result<Html<String>, PageError> {
    let quiz = direct_play::load_quiz(id, &*state.quiz_repository).await?;
    Ok(views::play::play(&session.take_flashes(), &quiz, &query.answer))
}

/// GET /quizzes/{id}/check
#[instrument(skip(state, session))]
async fn check(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Query(query): Query<AnswerQuery>,
) -> Result<Html<String>, PageError> {
    let result = direct_play::check_answer(id, &query.answer, &*state.quiz_repository).await?;

    info!(quiz_id = id, correct = result.correct, "checked answer");

    Ok(views::play::result(&session.take_flashes(), &result))
}

/// GET /quizzes/randomplay
#[instrument(skip(state, session), fields(session_id = %session.id()))]
async fn random_play(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let mut progress = session.random_play();

    let round = next_random_round(&mut progress, &state.rng, &*state.quiz_repository).await?;

    session.set_random_play(progress);

    let flashes = session.take_flashes();
    Ok(match round {
        RandomRound::Question { quiz, score } => views::play::random_play(&flashes, &quiz, score),
        RandomRound::Finished { score } => {
            info!(score, "random play finished");
            views::play::random_none(&flashes, score)
        }
    })
}

/// GET /quizzes/randomcheck/{id}
#[instrument(skip(state, session), fields(session_id = %session.id()))]
async fn random_check(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Query(query): Query<AnswerQuery>,
) -> Result<Html<String>, PageError> {
    let mut progress = session.random_play();

    let result =
        check_random_answer(&mut progress, id, &query.answer, &*state.quiz_repository).await?;

    session.set_random_play(progress);

    info!(
        quiz_id = id,
        correct = result.correct,
        score = result.score,
        "checked random play answer"
    );

    Ok(views::play::random_result(&session.take_flashes(), &result))
}

/// Returns the play router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quizzes/{id}/play", get(play))
        .route("/quizzes/{id}/check", get(check))
        .route("/quizzes/randomplay", get(random_play))
        .route("/quizzes/randomcheck/{id}", get(random_check))
}

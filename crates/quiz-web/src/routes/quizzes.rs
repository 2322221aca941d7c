//! Catalog pages: list, show, create, edit and delete quizzes.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Router, routing::get};
use quiz_catalog::application::{command_handlers, query_handlers};
use quiz_catalog::domain::commands;
use quiz_core::error::DomainError;
use quiz_core::quiz::QuizFields;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::PageError;
use crate::session::{FlashKind, Session};
use crate::state::AppState;
use crate::views;

/// Form body for create and edit.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuizForm {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
}

impl From<QuizForm> for QuizFields {
    fn from(form: QuizForm) -> Self {
        Self::new(form.question, form.answer)
    }
}

/// `?_method=` override for HTML forms, which can only POST.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MethodOverride {
    /// The intended HTTP method.
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

/// Queues the validation messages of a rejected form.
fn flash_form_errors(session: &Session, err: &DomainError) {
    session.flash(FlashKind::Error, "There are errors in the form:");
    for message in err.validation_messages() {
        session.flash(FlashKind::Error, message.as_str());
    }
}

/// GET /quizzes
#[instrument(skip(state, session))]
async fn index(State(state): State<AppState>, session: Session) -> Result<Html<String>, PageError> {
    let quizzes = query_handlers::list_quizzes(&*state.quiz_repository).await?;
    Ok(views::quizzes::index(&session.take_flashes(), &quizzes))
}

/// GET /quizzes/{id}
#[instrument(skip(state, session))]
async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let quiz = query_handlers::get_quiz_by_id(id, &*state.quiz_repository).await?;
    Ok(views::quizzes::show(&session.take_flashes(), &quiz))
}

/// GET /quizzes/new
async fn new_quiz(session: Session) -> Html<String> {
    views::quizzes::new_form(&session.take_flashes(), &QuizFields::default())
}

/// POST /quizzes
#[instrument(skip(state, session, form))]
async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<QuizForm>,
) -> Result<Response, PageError> {
    let command = commands::CreateQuiz {
        correlation_id: Uuid::new_v4(),
        fields: form.into(),
    };

    info!(correlation_id = %command.correlation_id, "handling create_quiz command");

    match command_handlers::handle_create_quiz(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
    )
    .await
    {
        Ok(quiz) => {
            session.flash(FlashKind::Success, "Quiz created successfully.");
            Ok(Redirect::to(&format!("/quizzes/{}", quiz.id)).into_response())
        }
        Err(err @ DomainError::Validation(_)) => {
            flash_form_errors(&session, &err);
            let page = views::quizzes::new_form(&session.take_flashes(), &command.fields);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => {
            session.flash(
                FlashKind::Error,
                format!("Error creating a new Quiz: {err}"),
            );
            Err(err.into())
        }
    }
}

/// GET /quizzes/{id}/edit
#[instrument(skip(state, session))]
async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let quiz = query_handlers::get_quiz_by_id(id, &*state.quiz_repository).await?;
    let fields = QuizFields::new(quiz.question, quiz.answer);
    Ok(views::quizzes::edit_form(&session.take_flashes(), id, &fields))
}

async fn update_quiz(
    state: &AppState,
    session: &Session,
    id: i64,
    fields: QuizFields,
) -> Result<Response, PageError> {
    // A missing quiz is a 404 even when the submitted form is invalid.
    query_handlers::get_quiz_by_id(id, &*state.quiz_repository).await?;

    let command = commands::UpdateQuiz {
        correlation_id: Uuid::new_v4(),
        quiz_id: id,
        fields,
    };

    info!(correlation_id = %command.correlation_id, "handling update_quiz command");

    match command_handlers::handle_update_quiz(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
    )
    .await
    {
        Ok(quiz) => {
            session.flash(FlashKind::Success, "Quiz edited successfully.");
            Ok(Redirect::to(&format!("/quizzes/{}", quiz.id)).into_response())
        }
        Err(err @ DomainError::Validation(_)) => {
            flash_form_errors(session, &err);
            let page = views::quizzes::edit_form(&session.take_flashes(), id, &command.fields);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => {
            session.flash(FlashKind::Error, format!("Error editing the Quiz: {err}"));
            Err(err.into())
        }
    }
}

async fn destroy_quiz(state: &AppState, session: &Session, id: i64) -> Result<Response, PageError> {
    let command = commands::DeleteQuiz {
        correlation_id: Uuid::new_v4(),
        quiz_id: id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_quiz command");

    match command_handlers::handle_delete_quiz(&command, &*state.quiz_repository).await {
        Ok(()) => {
            session.flash(FlashKind::Success, "Quiz deleted successfully.");
            Ok(Redirect::to("/quizzes").into_response())
        }
        Err(err @ DomainError::QuizNotFound(_)) => Err(err.into()),
        Err(err) => {
            session.flash(FlashKind::Error, format!("Error deleting the Quiz: {err}"));
            Err(err.into())
        }
    }
}

/// PUT /quizzes/{id}
#[instrument(skip(state, session, form))]
async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<QuizForm>,
) -> Result<Response, PageError> {
    update_quiz(&state, &session, id, form.into()).await
}

/// DELETE /quizzes/{id}
#[instrument(skip(state, session))]
async fn destroy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    destroy_quiz(&state, &session, id).await
}

/// POST /quizzes/{id}?_method=PUT|DELETE
#[instrument(skip(state, session, form))]
async fn override_method(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Query(method): Query<MethodOverride>,
    Form(form): Form<QuizForm>,
) -> Result<Response, PageError> {
    let requested = method.method.unwrap_or_default().to_ascii_uppercase();
    match requested.as_str() {
        "PUT" | "PATCH" => update_quiz(&state, &session, id, form.into()).await,
        "DELETE" => destroy_quiz(&state, &session, id).await,
        _ => Ok((
            StatusCode::METHOD_NOT_ALLOWED,
            views::layout::error_page(
                StatusCode::METHOD_NOT_ALLOWED,
                "POST to a quiz needs _method=PUT or _method=DELETE.",
            ),
        )
            .into_response()),
    }
}

/// Returns the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quizzes", get(index).post(create))
        .route("/quizzes/new", get(new_quiz))
        .route(
            "/quizzes/{id}",
            get(show).put(update).delete(destroy).post(override_method),
        )
        .route("/quizzes/{id}/edit", get(edit))
}

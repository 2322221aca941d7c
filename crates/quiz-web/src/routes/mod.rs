//! Route modules and router assembly.

pub mod api;
pub mod health;
pub mod home;
pub mod play;
pub mod quizzes;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use tower_http::cors::CorsLayer;

use crate::session;
use crate::state::AppState;
use crate::views;

/// GET on any unknown path.
async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        views::layout::error_page(StatusCode::NOT_FOUND, "This page does not exist."),
    )
        .into_response()
}

/// Builds the complete application router. Page routes run behind the
/// session layer; `/health` and `/api` do not touch sessions.
pub fn app(state: AppState) -> Router {
    let pages = Router::new()
        .merge(home::router())
        .merge(quizzes::router())
        .merge(play::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_layer,
        ));

    Router::new()
        .merge(health::router())
        .merge(pages)
        .nest("/api", api::router().layer(CorsLayer::permissive()))
        .fallback(not_found)
        .with_state(state)
}

//! Landing page.

use axum::response::Html;
use axum::{Router, routing::get};

use crate::session::Session;
use crate::state::AppState;
use crate::views;

/// GET /
async fn home(session: Session) -> Html<String> {
    views::layout::home(&session.take_flashes())
}

/// Returns the landing page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

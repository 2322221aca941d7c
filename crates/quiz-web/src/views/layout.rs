//! Page chrome shared by every HTML response.

use std::fmt::Write as _;

use axum::http::StatusCode;
use axum::response::Html;

use super::escape;
use crate::session::Flash;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}\
.flash{padding:.5rem 1rem;margin:.5rem 0;border-radius:4px}\
.flash.success{background:#e6f4ea}\
.flash.error{background:#fce8e6}\
.correct{color:#1e7e34}.incorrect{color:#c82333}\
form.inline{display:inline}";

/// Wraps `body` (already-escaped markup) in the site layout, with pending
/// flash messages above it.
#[must_use]
pub fn page(title: &str, flashes: &[Flash], body: &str) -> Html<String> {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{title} · Quiz</title><style>{STYLE}</style></head><body>\
         <nav><a href=\"/\">Home</a><a href=\"/quizzes\">Quizzes</a>\
         <a href=\"/quizzes/randomplay\">Random play</a></nav>",
        title = escape(title),
    );
    for flash in flashes {
        let _ = write!(
            html,
            "<div class=\"flash {}\">{}</div>",
            flash.kind.as_str(),
            escape(&flash.message)
        );
    }
    let _ = write!(html, "<main><h1>{}</h1>{body}</main></body></html>", escape(title));
    Html(html)
}

/// The landing page.
#[must_use]
pub fn home(flashes: &[Flash]) -> Html<String> {
    page(
        "Welcome",
        flashes,
        "<p>Test yourself with the quizzes in the catalog.</p>\
         <ul><li><a href=\"/quizzes\">Browse, create and edit quizzes</a></li>\
         <li><a href=\"/quizzes/randomplay\">Play every quiz in random order</a></li></ul>",
    )
}

/// Generic error page.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        &[],
        &format!(
            "<p>{}</p><p><a href=\"/quizzes\">Back to the quizzes</a></p>",
            escape(message)
        ),
    )
}

//! Catalog pages: index, show, new and edit.

use std::fmt::Write as _;

use axum::response::Html;
use quiz_catalog::application::query_handlers::QuizView;
use quiz_core::quiz::QuizFields;

use super::escape;
use super::layout::page;
use crate::session::Flash;

/// List of all quizzes with play, edit and delete actions.
#[must_use]
pub fn index(flashes: &[Flash], quizzes: &[QuizView]) -> Html<String> {
    let mut body = String::new();
    if quizzes.is_empty() {
        body.push_str("<p>There are no quizzes yet.</p>");
    } else {
        body.push_str("<table><tbody>");
        for quiz in quizzes {
            let _ = write!(
                body,
                "<tr><td><a href=\"/quizzes/{id}/play\">{question}</a></td>\
                 <td><a href=\"/quizzes/{id}\">Show</a></td>\
                 <td><a href=\"/quizzes/{id}/edit\">Edit</a></td>\
                 <td><form class=\"inline\" method=\"post\" action=\"/quizzes/{id}?_method=DELETE\">\
                 <button type=\"submit\">Delete</button></form></td></tr>",
                id = quiz.id,
                question = escape(&quiz.question),
            );
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("<p><a href=\"/quizzes/new\">Create new quiz</a></p>");
    page("Quizzes", flashes, &body)
}

/// A single quiz with its answer.
#[must_use]
pub fn show(flashes: &[Flash], quiz: &QuizView) -> Html<String> {
    let body = format!(
        "<dl><dt>Question</dt><dd>{question}</dd><dt>Answer</dt><dd>{answer}</dd></dl>\
         <p><a href=\"/quizzes/{id}/play\">Play</a> \
         <a href=\"/quizzes/{id}/edit\">Edit</a> \
         <a href=\"/quizzes\">Back</a></p>",
        id = quiz.id,
        question = escape(&quiz.question),
        answer = escape(&quiz.answer),
    );
    page("Quiz", flashes, &body)
}

fn quiz_form(action: &str, fields: &QuizFields, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\
         <label>Question: <input type=\"text\" name=\"question\" value=\"{question}\" \
         placeholder=\"Question\" autocomplete=\"off\"></label><br>\
         <label>Answer: <input type=\"text\" name=\"answer\" value=\"{answer}\" \
         placeholder=\"Answer\" autocomplete=\"off\"></label><br>\
         <button type=\"submit\">{submit}</button></form>\
         <p><a href=\"/quizzes\">Cancel</a></p>",
        action = escape(action),
        question = escape(&fields.question),
        answer = escape(&fields.answer),
        submit = escape(submit),
    )
}

/// Form for a new quiz, prefilled with `fields`.
#[must_use]
pub fn new_form(flashes: &[Flash], fields: &QuizFields) -> Html<String> {
    page("New quiz", flashes, &quiz_form("/quizzes", fields, "Create"))
}

/// Form editing quiz `id`, prefilled with `fields`.
#[must_use]
pub fn edit_form(flashes: &[Flash], id: i64, fields: &QuizFields) -> Html<String> {
    let action = format!("/quizzes/{id}?_method=PUT");
    page("Edit quiz", flashes, &quiz_form(&action, fields, "Save"))
}

//! Integration tests for the quiz catalog pages.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_index_without_quizzes_shows_empty_message(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/quizzes", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.unwrap().starts_with("text/html"));
    assert!(response.body.contains("There are no quizzes yet."));
    assert!(response.body.contains("Create new quiz"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_redirects_to_quiz_and_flashes_once(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;

    // POST /quizzes
    let response = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Peru&answer=Lima",
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location.unwrap();
    assert!(location.starts_with("/quizzes/"));

    // GET /quizzes/{id} shows the quiz and the flash
    let response = common::get(&app, &location, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Capital of Peru"));
    assert!(response.body.contains("Lima"));
    assert!(response.body.contains("Quiz created successfully."));

    // The flash is consumed by the first page that renders it
    let response = common::get(&app, &location, Some(&cookie)).await;
    assert!(!response.body.contains("Quiz created successfully."));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_with_empty_fields_rerenders_form_with_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;

    let response = common::post_form(&app, "/quizzes", "question=+&answer=", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("There are errors in the form:"));
    assert!(response.body.contains("Question must not be empty."));
    assert!(response.body.contains("Answer must not be empty."));

    let response = common::get(&app, "/quizzes", Some(&cookie)).await;
    assert!(response.body.contains("There are no quizzes yet."));
    assert!(!response.body.contains("There are errors in the form:"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_edit_form_is_prefilled(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;
    let created = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Chile&answer=Santiago",
        Some(&cookie),
    )
    .await;
    let location = created.location.unwrap();

    let response = common::get(&app, &format!("{location}/edit"), Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("value=\"Capital of Chile\""));
    assert!(response.body.contains("value=\"Santiago\""));
    assert!(response.body.contains("?_method=PUT"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_through_method_override(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;
    let created = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Chile&answer=Lima",
        Some(&cookie),
    )
    .await;
    let location = created.location.unwrap();
    let _ = common::get(&app, &location, Some(&cookie)).await;

    // POST /quizzes/{id}?_method=PUT
    let response = common::post_form(
        &app,
        &format!("{location}?_method=PUT"),
        "question=Capital+of+Chile&answer=Santiago",
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some(location.as_str()));

    let response = common::get(&app, &location, Some(&cookie)).await;
    assert!(response.body.contains("Quiz edited successfully."));
    assert!(response.body.contains("Santiago"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_with_put_verb(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;
    let created = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Chile&answer=Lima",
        Some(&cookie),
    )
    .await;
    let location = created.location.unwrap();

    let response = common::send_form(
        &app,
        "PUT",
        &location,
        "question=Capital+of+Peru&answer=Lima",
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let response = common::get(&app, &location, Some(&cookie)).await;
    assert!(response.body.contains("Capital of Peru"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_invalid_update_keeps_stored_quiz(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;
    let created = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Chile&answer=Santiago",
        Some(&cookie),
    )
    .await;
    let location = created.location.unwrap();
    let _ = common::get(&app, &location, Some(&cookie)).await;

    let response = common::post_form(
        &app,
        &format!("{location}?_method=PUT"),
        "question=&answer=Valparaiso",
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Question must not be empty."));
    assert!(!response.body.contains("Answer must not be empty."));
    assert!(response.body.contains("value=\"Valparaiso\""));

    let response = common::get(&app, &location, Some(&cookie)).await;
    assert!(response.body.contains("Santiago"));
    assert!(!response.body.contains("Valparaiso"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_missing_quiz_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_form(
        &app,
        "/quizzes/999?_method=PUT",
        "question=Q&answer=A",
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("there is no quiz with id=999"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_through_method_override(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = common::start_session(&app).await;
    let created = common::post_form(
        &app,
        "/quizzes",
        "question=Capital+of+Chile&answer=Santiago",
        Some(&cookie),
    )
    .await;
    let location = created.location.unwrap();
    let _ = common::get(&app, &location, Some(&cookie)).await;

    // POST /quizzes/{id}?_method=DELETE
    let response =
        common::post_form(&app, &format!("{location}?_method=DELETE"), "", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/quizzes"));

    let response = common::get(&app, "/quizzes", Some(&cookie)).await;
    assert!(response.body.contains("Quiz deleted successfully."));
    assert!(response.body.contains("There are no quizzes yet."));

    let response = common::get(&app, &location, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_with_delete_verb_on_missing_quiz_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::send_form(&app, "DELETE", "/quizzes/999", "", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_post_with_unknown_method_override_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_form(&app, "/quizzes/1?_method=TRACE", "", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_show_and_edit_missing_quiz_return_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let show = common::get(&app, "/quizzes/42", None).await;
    let edit = common::get(&app, "/quizzes/42/edit", None).await;

    assert_eq!(show.status, StatusCode::NOT_FOUND);
    assert_eq!(edit.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_numeric_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/quizzes/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_new_form_renders_empty_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/quizzes/new", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("action=\"/quizzes\""));
    assert!(response.body.contains("value=\"\""));
}

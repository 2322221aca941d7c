//! Shared test helpers for web integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use chrono::TimeDelta;
use http_body_util::BodyExt;
use quiz_core::clock::Clock;
use quiz_core::repository::QuizRepository;
use quiz_core::rng::DeterministicRng;
use quiz_store::PgQuizRepository;
use quiz_test_support::{FixedClock, MockRng, SequenceRng};
use sqlx::PgPool;
use tower::ServiceExt;

use quiz_web::routes;
use quiz_web::session::SessionStore;
use quiz_web::state::AppState;

/// Build the full app over an arbitrary repository with a fixed clock and the
/// given RNG.
pub fn build_app_with(
    repo: Arc<dyn QuizRepository>,
    rng: impl DeterministicRng + Send + 'static,
) -> Router {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::default());
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let app_state = AppState::new(clock, rng, repo, SessionStore::new(TimeDelta::hours(1)));

    routes::app(app_state)
}

/// Build the full app over an arbitrary repository with an RNG that always
/// picks the first remaining quiz.
pub fn build_app(repo: Arc<dyn QuizRepository>) -> Router {
    build_app_with(repo, MockRng)
}

/// Build the full app with a real `PgQuizRepository`. Uses the same router
/// as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(Arc::new(PgQuizRepository::new(pool)))
}

/// Build the full app with a real `PgQuizRepository` and scripted picks.
pub fn build_test_app_with_rng(pool: PgPool, rng: SequenceRng) -> Router {
    build_app_with(Arc::new(PgQuizRepository::new(pool)), rng)
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    /// `name=value` of a `Set-Cookie` header, if any.
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let header = |name| {
        response
            .headers()
            .get(name)
            .map(|v: &axum::http::HeaderValue| v.to_str().unwrap().to_owned())
    };
    let location = header(LOCATION);
    let content_type = header(CONTENT_TYPE);
    let cookie = header(SET_COOKIE).map(|raw| raw.split(';').next().unwrap().to_owned());
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body_bytes.to_vec()).unwrap();

    TestResponse {
        status,
        location,
        cookie,
        content_type,
        body,
    }
}

/// Send a GET request, optionally carrying a session cookie.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Send a form-encoded request with the given method.
pub async fn send_form(
    app: &Router,
    method: &str,
    uri: &str,
    form: &str,
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(form.to_owned())).unwrap()).await
}

/// Send a POST form request.
pub async fn post_form(app: &Router, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
    send_form(app, "POST", uri, form, cookie).await
}

/// Start a session by visiting the home page; returns the cookie to send
/// on later requests.
pub async fn start_session(app: &Router) -> String {
    let response = get(app, "/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    response.cookie.expect("home page starts a session")
}

/// Send a GET request and parse the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri, None).await;
    let json = response.json();
    (response.status, json)
}

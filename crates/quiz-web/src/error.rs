//! Quiz web: error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quiz_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

use crate::views;

/// Startup and runtime errors for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Tracing or span export could not be set up.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Seeding the catalog failed.
    #[error("startup error: {0}")]
    Domain(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

fn classify(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::QuizNotFound(_) => (StatusCode::NOT_FOUND, "quiz_not_found"),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::Infrastructure(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
        }
    }
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// JSON wrapper around `DomainError` for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = classify(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "api request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// HTML wrapper around `DomainError` for the page routes. Renders the
/// generic error page.
#[derive(Debug)]
pub struct PageError(pub DomainError);

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _) = classify(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "page request failed");
        } else {
            tracing::info!(error = %self.0, status = status.as_u16(), "page request rejected");
        }

        (status, views::layout::error_page(status, &self.0.to_string())).into_response()
    }
}

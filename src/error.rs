//! Web-boundary error type.
//!
//! The database layer reports failures as `anyhow::Error`; handlers wrap
//! them in [`AppError`] so axum can turn them into a generic 500 page. The
//! underlying error is logged for the operator but never rendered to the
//! client.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors that terminate a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Any persistence failure. Surfaced to the user as "storage
    /// unavailable" with no driver detail.
    #[error("storage unavailable")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage(err) => {
                tracing::error!("database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(
                        "<!DOCTYPE html><html><body>\
                         <h1>Storage unavailable</h1>\
                         <p>The task list could not be reached. Please try again later.</p>\
                         </body></html>"
                            .to_string(),
                    ),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for request handlers.
pub type AppResult<T> = std::result::Result<T, AppError>;

//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Error bodies are JSON `{"error": "..."}`; 4xx
//! messages are safe to surface verbatim, 5xx collapse to one generic
//! string and never leak internals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Auth(
                    AuthError::Repository(_) | AuthError::PasswordHash | AuthError::TokenSigning
                )
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::DuplicateEmail
                | AuthError::InvalidCredentials
                | AuthError::InvalidEmail(_)
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash | AuthError::TokenSigning => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Auth(err) if status == StatusCode::BAD_REQUEST => match err {
                AuthError::DuplicateEmail => "email already registered".to_string(),
                AuthError::InvalidCredentials => "invalid credentials".to_string(),
                AuthError::InvalidEmail(_) => "invalid email address".to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                _ => "authentication error".to_string(),
            },
            _ => "internal server error".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

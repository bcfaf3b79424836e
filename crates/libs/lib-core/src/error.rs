//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] used across all backend modules,
//! following the `thiserror` pattern.
//!
//! Every variant maps to an HTTP status:
//!
//! - [`Validation`](AppError::Validation) → 400 with field detail
//! - [`Conflict`](AppError::Conflict) → 409 (duplicate email)
//! - [`NotFound`](AppError::NotFound) → 404
//! - [`AuthFailed`](AppError::AuthFailed) → 401 with a deliberately generic
//!   message, so a caller cannot tell "no such account" from "wrong password"
//! - [`Unauthorized`](AppError::Unauthorized) → 401 with a
//!   `WWW-Authenticate: Bearer` challenge; the inner detail (expired vs.
//!   revoked vs. bad signature) reaches server logs only
//! - [`Config`](AppError::Config) / [`Internal`](AppError::Internal) → 500
//!   with a generic body; detail is logged server-side
//!
//! No failure is retried; every error is terminal for its request.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or invalid user input.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Uniqueness conflict, e.g. an email that is already registered.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad credentials at login. Carries no detail on purpose.
    #[error("Invalid credentials")]
    AuthFailed,

    /// Missing, invalid, expired, or revoked bearer token.
    ///
    /// The string is the server-side reason and never reaches the client.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected persistence or infrastructure error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthFailed | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing message.
    ///
    /// Authentication and internal errors return fixed messages so that
    /// nothing about the failure cause leaks to the caller.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::AuthFailed => "Invalid credentials".to_string(),
            AppError::Unauthorized(_) => "Could not validate credentials".to_string(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Short variant name used as the machine-readable error code.
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::Conflict(_) => "Conflict",
            AppError::NotFound(_) => "NotFound",
            AppError::AuthFailed => "AuthFailed",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Config(_) => "Config",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Full detail goes to server logs; the body stays sanitized.
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Server error: {}", self);
            }
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Auth error: {}", self);
            }
            _ => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let challenge = matches!(self, AppError::Unauthorized(_));

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        let mut response = (status, body).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, header::HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Account not found".to_string()),
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

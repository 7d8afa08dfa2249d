//! Error types.
//!
//! - [`LookupError`] - failures of store operations, converted into the
//!   user-facing error slot and never returned to callers
//! - [`AppError`] - HTTP errors of the state host, rendered as JSON

use crate::domain::backend::BackendError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message shown when a lookup is submitted without a domain name.
pub const EMPTY_DOMAIN_NAME: &str = "cannot be empty domain name";

/// Message shown when the backend could not be reached or understood.
pub const RETRY_LATER: &str = "try again in minutes";

/// Why a store operation did not produce a result.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("cannot be empty domain name")]
    EmptyDomainName,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl LookupError {
    /// Text committed to the store's error slot.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyDomainName => EMPTY_DOMAIN_NAME.to_string(),
            Self::Backend(BackendError::UnexpectedStatus { status }) => {
                format!("unexpected response from server (status {status})")
            }
            Self::Backend(BackendError::Transport(_) | BackendError::Decode(_)) => {
                RETRY_LATER.to_string()
            }
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyDomainName => "validation",
            Self::Backend(BackendError::Transport(_)) => "transport",
            Self::Backend(BackendError::Decode(_)) => "decode",
            Self::Backend(BackendError::UnexpectedStatus { .. }) => "unexpected_status",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by the state host's HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    MethodNotAllowed { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::MethodNotAllowed { message, details } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

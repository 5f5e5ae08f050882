//! Application error type and its mapping to HTTP responses.
//!
//! Every failure is one [`AppError`] variant. At the HTTP boundary the variant
//! is reduced to an [`ErrorKind`], which fixes the status code and the public
//! `error` code; the body is always `{"error": ..., "message": ...}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub use crate::utils::url_validator::ValidationError;

const NOT_FOUND_MESSAGE: &str = "This url does not exist.";
const KEY_EXHAUSTION_MESSAGE: &str = "Couldn't get unique url key.";
const TIMEOUT_MESSAGE: &str = "Request took too long to process.";
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again or contact support.";

/// Public error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub error: &'static str,
    pub message: String,
}

/// Client-visible error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    WrongRequest,
    NoResult,
    Timeout,
    Generic,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::WrongRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NoResult => StatusCode::NOT_FOUND,
            ErrorKind::Timeout => StatusCode::REQUEST_TIMEOUT,
            ErrorKind::Generic => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::WrongRequest => "WRONG_REQUEST",
            ErrorKind::NoResult => "NO_RESULT",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Generic => "GENERIC",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was malformed or the URL was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists for the short key.
    #[error("Short key not found: {short_key}")]
    NotFound { short_key: String },

    /// No free key was found within the attempt limit.
    #[error("No unique short key after {attempts} attempts")]
    KeyExhaustion { attempts: usize },

    /// A candidate key is already taken.
    ///
    /// Raised by the uniqueness check and by inserts that hit the UNIQUE
    /// constraint; the key services retry on it and never let it escape.
    #[error("Short key already taken: {short_key}")]
    DuplicateKey { short_key: String },

    /// The request ran past its time limit.
    #[error("Request timed out")]
    Timeout,

    /// Connection or query failure.
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(short_key: impl Into<String>) -> Self {
        Self::NotFound {
            short_key: short_key.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::WrongRequest,
            AppError::NotFound { .. } => ErrorKind::NoResult,
            AppError::Timeout => ErrorKind::Timeout,
            AppError::KeyExhaustion { .. }
            | AppError::DuplicateKey { .. }
            | AppError::Storage(_)
            | AppError::Internal(_) => ErrorKind::Generic,
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, AppError::DuplicateKey { .. })
    }

    /// Message safe to show to clients. Internal details are never included.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(reason) => reason.to_string(),
            AppError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            AppError::KeyExhaustion { .. } => KEY_EXHAUSTION_MESSAGE.to_string(),
            AppError::Timeout => TIMEOUT_MESSAGE.to_string(),
            AppError::DuplicateKey { .. } | AppError::Storage(_) | AppError::Internal(_) => {
                GENERIC_MESSAGE.to_string()
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            error: self.kind().code(),
            message: self.public_message(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationError::MalformedBody(rejection.body_text()))
    }
}

/// A key that does not decode cannot name a record.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => AppError::not_found(e.body_text()),
            other => AppError::internal(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match &self {
            AppError::Storage(_) | AppError::Internal(_) | AppError::DuplicateKey { .. } => {
                tracing::error!(error = %self, "Request failed");
            }
            AppError::KeyExhaustion { .. } => {
                tracing::warn!(error = %self, "Key generation exhausted");
            }
            AppError::Timeout => {
                tracing::warn!("Request timed out");
            }
            AppError::Validation(_) | AppError::NotFound { .. } => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }

        (kind.status(), Json(self.to_error_info())).into_response()
    }
}

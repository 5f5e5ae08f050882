//! Request timeout middleware.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Aborts requests that take longer than `timeout` with `408 Request Timeout`.
///
/// Dropping the handler future releases any pooled connection or open
/// transaction it holds; uncommitted transactions roll back. The 408 itself
/// has an empty body until [`error_body`] replaces it.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Gives timeout responses the usual `{error, message}` body.
///
/// Mount with `axum::middleware::map_response` outside every [`layer`].
pub async fn error_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        AppError::Timeout.into_response()
    } else {
        response
    }
}

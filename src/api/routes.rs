//! URL API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::timeout;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;

/// Routes mounted under `/urls`.
///
/// # Endpoints
///
/// - `POST /`            - Shorten a URL (own, tighter timeout)
/// - `GET  /{key}`       - Redirect to the origin URL
/// - `GET  /{key}/stat`  - Call statistics for a key
pub fn url_routes(shorten_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(shorten_handler).layer(timeout::layer(shorten_timeout)),
        )
        .route("/{key}", get(redirect_handler))
        .route("/{key}/stat", get(stats_handler))
}

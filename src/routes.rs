//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Liveness text
//! - `GET  /health`         - Health check (database ping)
//! - `GET  /{key}`          - Short URL redirect
//! - `/urls/*`              - Shorten, redirect and statistics API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Global request ceiling, tighter on `POST /urls`; JSON 408 body
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Request time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request: Duration,
    pub shorten: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(8000),
            shorten: Duration::from_millis(3000),
        }
    }
}

/// Builds the router with all routes and middleware except path
/// normalization.
pub fn build_router(state: AppState, timeouts: Timeouts) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .nest("/urls", api::routes::url_routes(timeouts.shorten))
        .with_state(state)
        .layer(timeout::layer(timeouts.request))
        .layer(middleware::map_response(timeout::error_body))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before
/// routing.
pub fn app_router(state: AppState, timeouts: Timeouts) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, timeouts))
}

//! Liveness and readiness endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::api::dto::health::{Health, HealthReport, Probe, ProbeResult, Probes};
use crate::state::AppState;

/// `GET /` answers plain `Root` without touching the database.
pub async fn root_handler() -> &'static str {
    "Root"
}

/// `GET /health` pings the database.
///
/// 200 with `"status": "healthy"` when the ping succeeds, otherwise 503 with
/// `"degraded"`. The body has the same shape either way.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let database = probe_database(&state).await;

    let (code, status) = match database.status {
        ProbeResult::Ok => (StatusCode::OK, Health::Healthy),
        ProbeResult::Error => (StatusCode::SERVICE_UNAVAILABLE, Health::Degraded),
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: Probes { database },
    };

    (code, Json(report)).into_response()
}

async fn probe_database(state: &AppState) -> Probe {
    let started = Instant::now();
    let result = state.url_service.ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let status = match result {
        Ok(()) => ProbeResult::Ok,
        Err(e) => {
            tracing::error!(error = %e, "Database probe failed");
            ProbeResult::Error
        }
    };

    Probe { status, latency_ms }
}

//! Handler for per-key statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns call statistics for a short key.
///
/// # Endpoint
///
/// `GET /urls/{key}/stat`
///
/// # Response
///
/// ```json
/// {
///   "call_count": 2,
///   "origin_url": "https://www.google.co.kr/",
///   "created_date": "2024-01-01T00:00:00Z",
///   "short_url": "localhost:3000/57Z4WQ",
///   "call_logs": ["2024-01-01T00:01:00Z", "2024-01-01T00:02:00Z"]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `NO_RESULT` if the key does not exist.
pub async fn stats_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(key) = key?;
    let stats = state.stats_service.get_stats(&key).await?;

    Ok(Json(StatsResponse {
        call_count: stats.record.call_count,
        short_url: state.url_service.short_url(&stats.record.short_key),
        origin_url: stats.record.origin_url,
        created_date: stats.record.created_date,
        call_logs: stats
            .call_logs
            .into_iter()
            .map(|log| log.call_date)
            .collect(),
    }))
}

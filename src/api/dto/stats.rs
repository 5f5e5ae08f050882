//! DTOs for per-key statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a single short key.
///
/// `call_logs` holds one timestamp per redirect, oldest first.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub call_count: i64,
    pub origin_url: String,
    pub created_date: DateTime<Utc>,
    pub short_url: String,
    pub call_logs: Vec<DateTime<Utc>>,
}

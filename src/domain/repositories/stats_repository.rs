//! Repository trait for short URL statistics.

use crate::domain::entities::{CallLog, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Statistics for a single short key.
///
/// `call_logs` is ordered oldest first and, because every redirect writes
/// both, has exactly `record.call_count` entries.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub record: UrlRecord,
    pub call_logs: Vec<CallLog>,
}

/// Repository interface for reading call statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Loads the record and its call log as one consistent snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlStats))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_stats_by_key(&self, short_key: &str) -> Result<Option<UrlStats>, AppError>;
}

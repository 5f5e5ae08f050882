//! Call statistics service.

use std::sync::Arc;

use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;
use crate::utils::key_generator::is_lookup_key;

/// Service for reading per-key call statistics.
pub struct StatsService<R: StatsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: StatsRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the record, call count and call log for a short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the key.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_stats(&self, short_key: &str) -> Result<UrlStats, AppError> {
        if !is_lookup_key(short_key) {
            return Err(AppError::not_found(short_key));
        }

        self.repository
            .get_stats_by_key(short_key)
            .await?
            .ok_or_else(|| AppError::not_found(short_key))
    }
}

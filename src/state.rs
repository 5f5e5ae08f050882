//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{StatsService, UrlService};
use crate::domain::repositories::{StatsRepository, UrlRepository};

/// Services shared by all requests.
///
/// Cheap to clone; each field is an `Arc`. Repositories are trait objects so
/// the same state works over PostgreSQL and over test doubles.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
    pub stats_service: Arc<StatsService<dyn StatsRepository>>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService<dyn UrlRepository>>,
        stats_service: Arc<StatsService<dyn StatsRepository>>,
    ) -> Self {
        Self {
            url_service,
            stats_service,
        }
    }
}

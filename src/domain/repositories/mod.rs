//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Record creation, lookup and call counting
//! - [`StatsRepository`] - Call statistics snapshots

pub mod stats_repository;
pub mod url_repository;

pub use stats_repository::{StatsRepository, UrlStats};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;

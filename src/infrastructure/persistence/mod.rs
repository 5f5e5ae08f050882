//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Record storage, lookup and call counting
//! - [`PgStatsRepository`] - Call statistics snapshots
//!
//! Schema migrations are embedded from `./migrations` as [`MIGRATOR`].

pub mod pg_stats_repository;
pub mod pg_url_repository;

pub use pg_stats_repository::PgStatsRepository;
pub use pg_url_repository::PgUrlRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

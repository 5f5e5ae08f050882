//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, key acquisition and redirects
//! - [`services::stats_service::StatsService`] - Per-key call statistics

pub mod services;

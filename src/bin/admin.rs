//! CLI administration tool for url-keeper.
//!
//! Runs database maintenance and the shorten/stat operations directly against
//! PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply embedded migrations
//! cargo run --bin admin -- db migrate
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://www.rust-lang.org/
//!
//! # Show statistics for a key
//! cargo run --bin admin -- stat 57Z4WQ
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_keeper::config`.

use url_keeper::application::services::{StatsService, UrlService};
use url_keeper::config::{self, Config};
use url_keeper::domain::repositories::{StatsRepository, UrlRepository};
use url_keeper::infrastructure::persistence::{MIGRATOR, PgStatsRepository, PgUrlRepository};
use url_keeper::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-keeper.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Shorten a URL and print the short URL
    Shorten {
        /// Origin URL (http, https or chrome scheme)
        url: String,
    },

    /// Show call statistics for a short key
    Stat {
        /// Short key, e.g. 57Z4WQ
        key: String,

        /// Print every call timestamp
        #[arg(short, long)]
        logs: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Show record and call totals
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Shorten { url } => shorten(&config, pool, &url).await?,
        Commands::Stat { key, logs } => stat(&config, pool, &key, logs).await?,
    }

    Ok(())
}

fn url_service(config: &Config, pool: Arc<PgPool>) -> UrlService<dyn UrlRepository> {
    let repository: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool));
    UrlService::new(repository, config.keys, config.public_base())
}

async fn shorten(config: &Config, pool: PgPool, url: &str) -> Result<()> {
    let service = url_service(config, Arc::new(pool));

    let record = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.public_message()))?;

    println!("{}", "Short URL created".green().bold());
    println!();
    println!("  Key:       {}", record.short_key.cyan());
    println!(
        "  Short URL: {}",
        service.short_url(&record.short_key).bright_white().bold()
    );
    println!("  Origin:    {}", record.origin_url.bright_black());
    println!();

    Ok(())
}

async fn stat(config: &Config, pool: PgPool, key: &str, show_logs: bool) -> Result<()> {
    let pool = Arc::new(pool);
    let urls = url_service(config, pool.clone());
    let repository: Arc<dyn StatsRepository> = Arc::new(PgStatsRepository::new(pool));
    let stats_service = StatsService::new(repository);

    let stats = stats_service
        .get_stats(key)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.public_message()))?;

    println!("{}", format!("Statistics for {key}").bright_blue().bold());
    println!();
    println!(
        "  Short URL: {}",
        urls.short_url(&stats.record.short_key).cyan()
    );
    println!("  Origin:    {}", stats.record.origin_url);
    println!(
        "  Created:   {}",
        stats
            .record
            .created_date
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!(
        "  Calls:     {}",
        stats.record.call_count.to_string().bright_green().bold()
    );

    if show_logs && !stats.call_logs.is_empty() {
        println!();
        for log in &stats.call_logs {
            println!(
                "    {}",
                log.call_date.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            );
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let calls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_logs")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database Information".bright_blue().bold());
            println!();
            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Short URLs: {}",
                urls_count.to_string().bright_green().bold()
            );
            println!(
                "  Calls:      {}",
                calls_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

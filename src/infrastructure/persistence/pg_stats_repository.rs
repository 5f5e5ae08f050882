//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_url_repository::UrlRow;
use crate::domain::entities::CallLog;
use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CallLogRow {
    id: i64,
    url_id: i64,
    call_date: DateTime<Utc>,
}

/// PostgreSQL repository for call statistics.
///
/// The record and its call log are read in one `REPEATABLE READ` transaction,
/// so a redirect committed in between cannot make them disagree.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn get_stats_by_key(&self, short_key: &str) -> Result<Option<UrlStats>, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, origin_url, short_key, created_date, call_count
            FROM urls
            WHERE short_key = $1
            "#,
        )
        .bind(short_key)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let call_logs = sqlx::query_as::<_, CallLogRow>(
            r#"
            SELECT id, url_id, call_date
            FROM url_logs
            WHERE url_id = $1
            ORDER BY call_date ASC, id ASC
            "#,
        )
        .bind(row.id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|r| CallLog::new(r.id, r.url_id, r.call_date))
        .collect();

        tx.commit().await?;

        Ok(Some(UrlStats {
            record: row.into(),
            call_logs,
        }))
    }
}

//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_short_key;

/// Row shape shared by every query that returns a full record.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UrlRow {
    pub id: i64,
    pub origin_url: String,
    pub short_key: String,
    pub created_date: DateTime<Utc>,
    pub call_count: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(
            row.id,
            row.origin_url,
            row.short_key,
            row.created_date,
            row.call_count,
        )
    }
}

/// PostgreSQL repository for short URL records.
///
/// Every statement uses bound parameters. Connections are borrowed from the
/// pool per statement and transactions roll back when dropped uncommitted.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (origin_url, short_key)
            VALUES ($1, $2)
            RETURNING id, origin_url, short_key, created_date, call_count
            "#,
        )
        .bind(&new_url.origin_url)
        .bind(&new_url.short_key)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_short_key(&e) {
                AppError::DuplicateKey {
                    short_key: new_url.short_key.clone(),
                }
            } else {
                AppError::Storage(e)
            }
        })?;

        Ok(row.into())
    }

    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM urls WHERE short_key = $1)",
        )
        .bind(short_key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn record_call(&self, short_key: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET call_count = call_count + 1
            WHERE short_key = $1
            RETURNING id, origin_url, short_key, created_date, call_count
            "#,
        )
        .bind(short_key)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("INSERT INTO url_logs (url_id) VALUES ($1)")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

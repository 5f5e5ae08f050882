#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url_keeper::application::services::{KeySettings, StatsService, UrlService};
use url_keeper::domain::entities::{CallLog, NewUrlRecord, UrlRecord};
use url_keeper::domain::repositories::{StatsRepository, UrlRepository, UrlStats};
use url_keeper::error::AppError;
use url_keeper::infrastructure::persistence::{PgStatsRepository, PgUrlRepository};
use url_keeper::routes::{Timeouts, build_router};
use url_keeper::state::AppState;

pub const PUBLIC_BASE: &str = "localhost:3000";

#[derive(Default)]
struct Tables {
    urls: HashMap<String, UrlRecord>,
    logs: Vec<CallLog>,
}

/// In-memory stand-in for PostgreSQL implementing both repositories.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    next_id: AtomicU64,
    failing: AtomicBool,
    keys_always_taken: AtomicBool,
    insert_delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every call fail as if the database were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes the uniqueness check report every candidate as taken.
    pub fn set_keys_always_taken(&self, taken: bool) {
        self.keys_always_taken.store(taken, Ordering::SeqCst);
    }

    pub fn set_insert_delay(&self, delay: Duration) {
        *self.insert_delay.lock().unwrap() = Some(delay);
    }

    /// Stores a record directly, bypassing key generation.
    pub fn seed(&self, short_key: &str, origin_url: &str) -> UrlRecord {
        let record = UrlRecord::new(
            self.next_id(),
            origin_url.to_string(),
            short_key.to_string(),
            Utc::now(),
            0,
        );
        self.tables
            .lock()
            .unwrap()
            .urls
            .insert(short_key.to_string(), record.clone());
        record
    }

    pub fn record(&self, short_key: &str) -> Option<UrlRecord> {
        self.tables.lock().unwrap().urls.get(short_key).cloned()
    }

    pub fn len(&self) -> usize {
        self.tables.lock().unwrap().urls.len()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn create(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.check_available()?;

        let delay = *self.insert_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut tables = self.tables.lock().unwrap();
        if tables.urls.contains_key(&new_url.short_key) {
            return Err(AppError::DuplicateKey {
                short_key: new_url.short_key,
            });
        }

        let record = UrlRecord::new(
            self.next_id(),
            new_url.origin_url,
            new_url.short_key.clone(),
            Utc::now(),
            0,
        );
        tables.urls.insert(new_url.short_key, record.clone());
        Ok(record)
    }

    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError> {
        self.check_available()?;

        if self.keys_always_taken.load(Ordering::SeqCst) {
            return Ok(true);
        }
        Ok(self.tables.lock().unwrap().urls.contains_key(short_key))
    }

    async fn record_call(&self, short_key: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check_available()?;

        let mut tables = self.tables.lock().unwrap();
        let Some(record) = tables.urls.get_mut(short_key) else {
            return Ok(None);
        };

        record.call_count += 1;
        let updated = record.clone();

        let log_id = tables.logs.len() as i64 + 1;
        tables
            .logs
            .push(CallLog::new(log_id, updated.id, Utc::now()));

        Ok(Some(updated))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn get_stats_by_key(&self, short_key: &str) -> Result<Option<UrlStats>, AppError> {
        self.check_available()?;

        let tables = self.tables.lock().unwrap();
        let Some(record) = tables.urls.get(short_key).cloned() else {
            return Ok(None);
        };

        let call_logs = tables
            .logs
            .iter()
            .filter(|log| log.url_id == record.id)
            .cloned()
            .collect();

        Ok(Some(UrlStats { record, call_logs }))
    }
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    let url_repository: Arc<dyn UrlRepository> = store.clone();
    let stats_repository: Arc<dyn StatsRepository> = store;

    let url_service = UrlService::new(url_repository, KeySettings::default(), PUBLIC_BASE);
    let stats_service = StatsService::new(stats_repository);

    AppState::new(Arc::new(url_service), Arc::new(stats_service))
}

/// Full application router over a fresh in-memory store.
pub fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let store = MemoryStore::new();
    let app = build_router(create_test_state(store.clone()), Timeouts::default());
    (app, store)
}

/// Full application router over PostgreSQL repositories.
pub fn create_pg_app(pool: PgPool) -> Router {
    let pool = Arc::new(pool);
    let url_repository: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool.clone()));
    let stats_repository: Arc<dyn StatsRepository> = Arc::new(PgStatsRepository::new(pool));

    let state = AppState::new(
        Arc::new(UrlService::new(
            url_repository,
            KeySettings::default(),
            PUBLIC_BASE,
        )),
        Arc::new(StatsService::new(stats_repository)),
    );

    build_router(state, Timeouts::default())
}

/// Extracts the key from a short URL such as `localhost:3000/57Z4WQ`.
pub fn key_of(short_url: &str) -> String {
    short_url
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

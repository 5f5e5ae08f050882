//! Short URL creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, generate_key, is_lookup_key};
use crate::utils::retry::retry_bounded;
use crate::utils::url_validator::validate_origin_url;

/// Default number of candidate keys tried before giving up.
pub const DEFAULT_KEY_ATTEMPTS: usize = 20;

/// Insert attempts per shorten request: the first one plus one more with a
/// fresh key if the UNIQUE constraint rejects the insert.
const INSERT_ATTEMPTS: usize = 2;

/// Key generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySettings {
    pub length: usize,
    pub max_attempts: usize,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
            max_attempts: DEFAULT_KEY_ATTEMPTS,
        }
    }
}

/// Service for creating short URLs and resolving them for redirects.
///
/// The uniqueness check before insert only makes collisions unlikely. The
/// UNIQUE constraint on `urls.short_key` is what guarantees them impossible;
/// an insert rejected by it is retried once with a new key.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    key_settings: KeySettings,
    public_base: String,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `public_base` is the `host:port` prefix used to build short URLs.
    pub fn new(repository: Arc<R>, key_settings: KeySettings, public_base: impl Into<String>) -> Self {
        Self {
            repository,
            key_settings,
            public_base: public_base.into(),
        }
    }

    /// Validates `origin_url`, picks a free key and stores the mapping.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is malformed or too long
    /// - [`AppError::KeyExhaustion`] if no free key could be found
    /// - [`AppError::Storage`] on database errors
    pub async fn shorten(&self, origin_url: &str) -> Result<UrlRecord, AppError> {
        validate_origin_url(origin_url)?;

        let record = retry_bounded(
            INSERT_ATTEMPTS,
            move || self.insert_with_fresh_key(origin_url),
            |e: &AppError| {
                if let AppError::DuplicateKey { short_key } = e {
                    tracing::warn!(short_key = %short_key, "Insert hit taken key, retrying");
                }
                e.is_duplicate_key()
            },
        )
        .await
        .map_err(|e| match e {
            AppError::DuplicateKey { .. } => AppError::KeyExhaustion {
                attempts: INSERT_ATTEMPTS,
            },
            other => other,
        })?;

        tracing::info!(short_key = %record.short_key, "Short url created");

        Ok(record)
    }

    /// Returns a key that did not exist at the time of the check.
    ///
    /// Tries up to `key_settings.max_attempts` random candidates.
    ///
    /// # Errors
    ///
    /// - [`AppError::KeyExhaustion`] if every candidate was taken
    /// - [`AppError::Storage`] on database errors (not retried)
    pub async fn acquire_unique_key(&self) -> Result<String, AppError> {
        let attempts = self.key_settings.max_attempts;

        retry_bounded(
            attempts,
            move || self.try_candidate_key(),
            |e: &AppError| e.is_duplicate_key(),
        )
        .await
        .map_err(|e| match e {
            AppError::DuplicateKey { .. } => AppError::KeyExhaustion { attempts },
            other => other,
        })
    }

    /// Counts a redirect and returns the record to redirect to.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the key does not exist
    /// - [`AppError::Storage`] on database errors
    pub async fn resolve(&self, short_key: &str) -> Result<UrlRecord, AppError> {
        if !is_lookup_key(short_key) {
            return Err(AppError::not_found(short_key));
        }

        let record = self
            .repository
            .record_call(short_key)
            .await?
            .ok_or_else(|| AppError::not_found(short_key))?;

        tracing::debug!(short_key = %short_key, call_count = record.call_count, "Redirecting");

        Ok(record)
    }

    /// Checks that the backing storage answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Builds the public short URL for a key, e.g. `localhost:3000/ABC123`.
    pub fn short_url(&self, short_key: &str) -> String {
        format!("{}/{}", self.public_base.trim_end_matches('/'), short_key)
    }

    async fn try_candidate_key(&self) -> Result<String, AppError> {
        let candidate = generate_key(self.key_settings.length);

        if self.repository.exists_by_key(&candidate).await? {
            tracing::debug!(short_key = %candidate, "Candidate key taken");
            return Err(AppError::DuplicateKey {
                short_key: candidate,
            });
        }

        Ok(candidate)
    }

    async fn insert_with_fresh_key(&self, origin_url: &str) -> Result<UrlRecord, AppError> {
        let short_key = self.acquire_unique_key().await?;

        self.repository
            .create(NewUrlRecord {
                origin_url: origin_url.to_string(),
                short_key,
            })
            .await
    }
}

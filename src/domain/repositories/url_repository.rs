//! Repository trait for short URL records.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the short key is already taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Returns whether a record with this short key exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError>;

    /// Counts one redirect through `short_key`.
    ///
    /// Lookup and increment are a single atomic statement, and the call log
    /// entry is written in the same transaction. Returns the record as it is
    /// after the increment, or `None` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_call(&self, short_key: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the database cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}

//! Utility functions for key generation, URL validation, and retries.
//!
//! - [`key_generator`] - Random short key generation
//! - [`url_validator`] - Origin URL format and length checks
//! - [`retry`] - Bounded retry combinator
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod key_generator;
pub mod retry;
pub mod url_validator;

//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortened URL mapping with its call counter
//! - [`CallLog`] - A single redirect through a short key
//!
//! Creation inputs live next to their entity (`NewUrlRecord`).

pub mod call_log;
pub mod url_record;

pub use call_log::CallLog;
pub use url_record::{NewUrlRecord, UrlRecord};

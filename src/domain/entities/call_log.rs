//! Call log entity representing a single redirect.

use chrono::{DateTime, Utc};

/// One successful redirect through a short key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLog {
    pub id: i64,
    pub url_id: i64,
    pub call_date: DateTime<Utc>,
}

impl CallLog {
    pub fn new(id: i64, url_id: i64, call_date: DateTime<Utc>) -> Self {
        Self {
            id,
            url_id,
            call_date,
        }
    }
}

//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short key to its origin URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub origin_url: String,
    pub short_key: String,
    pub created_date: DateTime<Utc>,
    /// Number of successful redirects through this key.
    pub call_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        origin_url: String,
        short_key: String,
        created_date: DateTime<Utc>,
        call_count: i64,
    ) -> Self {
        Self {
            id,
            origin_url,
            short_key,
            created_date,
            call_count,
        }
    }
}

/// Input data for inserting a new record.
///
/// `created_date` is set by the database and `call_count` starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub origin_url: String,
    pub short_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "https://example.com/".to_string(),
            "ABC123".to_string(),
            now,
            0,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.origin_url, "https://example.com/");
        assert_eq!(record.short_key, "ABC123");
        assert_eq!(record.created_date, now);
        assert_eq!(record.call_count, 0);
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            origin_url: "https://rust-lang.org".to_string(),
            short_key: "XYZ789".to_string(),
        };

        assert_eq!(new_record.origin_url, "https://rust-lang.org");
        assert_eq!(new_record.short_key, "XYZ789");
    }
}

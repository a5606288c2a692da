//! Stored Entry Module
//!
//! Defines a single stored value together with its expiration metadata.

use chrono::Utc;

// == Stored Entry ==
/// A serialized value held by the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// JSON serialization of the value
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry, turning a relative TTL into an absolute deadline.
    ///
    /// # Arguments
    /// * `value` - Serialized JSON value
    /// * `ttl_seconds` - Optional TTL in seconds
    pub fn new(value: String, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now.saturating_add(ttl.saturating_mul(1000)));

        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied clock.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }

    // == Expiration ==
    /// Absolute expiration as Unix seconds, the form reported in listings.
    pub fn expiration_secs(&self) -> Option<u64> {
        self.expires_at.map(|ms| ms / 1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = StoredEntry::new("\"v\"".to_string(), None);

        assert_eq!(entry.value, "\"v\"");
        assert!(entry.expires_at.is_none());
        assert!(entry.expiration_secs().is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = StoredEntry::new("1".to_string(), Some(60));

        let expires_at = entry.expires_at.unwrap();
        assert_eq!(expires_at, entry.created_at + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_secs_truncates() {
        let entry = StoredEntry {
            value: "1".to_string(),
            created_at: 0,
            expires_at: Some(61_999),
        };

        assert_eq!(entry.expiration_secs(), Some(61));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = StoredEntry {
            value: "1".to_string(),
            created_at: now,
            expires_at: Some(now),
        };

        assert!(entry.is_expired_at(now), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(now - 1));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = StoredEntry::new("1".to_string(), Some(u64::MAX));

        assert_eq!(entry.expires_at, Some(u64::MAX));
        assert!(!entry.is_expired());
    }
}

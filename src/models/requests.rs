//! Request DTOs for the cache API
//!
//! Defines the structure of incoming request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

use crate::store::{ListOptions, DEFAULT_LIST_LIMIT, MAX_KEY_LENGTH, MAX_LIST_LIMIT};

/// Request body for PUT /api/cache/:key
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRequest {
    /// The value to store, any JSON type
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub expiration_ttl: Option<u64>,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.expiration_ttl == Some(0) {
            return Some("expirationTtl must be a positive integer".to_string());
        }
        None
    }
}

/// Query string for GET /api/cache
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub prefix: Option<String>,
    pub limit: Option<usize>,
    pub cursor: Option<String>,
}

impl ListQuery {
    /// Validates the query and turns it into store listing options.
    ///
    /// Empty `prefix` and `cursor` are treated as absent.
    pub fn into_options(self) -> Result<ListOptions, String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if limit == 0 || limit > MAX_LIST_LIMIT {
            return Err(format!(
                "limit must be an integer between 1 and {}",
                MAX_LIST_LIMIT
            ));
        }

        Ok(ListOptions {
            prefix: self.prefix.filter(|p| !p.is_empty()),
            limit,
            cursor: self.cursor.filter(|c| !c.is_empty()),
        })
    }
}

/// Checks a path key, returning an error message if it is unusable.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

//! Store Module
//!
//! The key-value store contract the HTTP layer talks to, plus the bundled
//! in-memory implementation with TTL expiration and cursor pagination.

mod entry;
mod memory;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

// Re-export public types
pub use entry::{current_timestamp_ms, StoredEntry};
pub use memory::MemoryKvStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 512;

/// Page size used when a listing does not ask for one
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Largest page a single listing may request
pub const MAX_LIST_LIMIT: usize = 1000;

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Store Contract ==
/// Uniform interface over a key-value store.
///
/// Implementations own expiration: an expired entry must look absent to
/// `get`, `delete` and `list`.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Returns the decoded value, or `None` if the key is absent or expired.
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Serializes and stores `value`, replacing any existing entry.
    ///
    /// `ttl_seconds` of `None` means the entry never expires.
    async fn put(&self, key: &str, value: &Value, ttl_seconds: Option<u64>) -> StoreResult<()>;

    /// Removes `key`, returning whether a live entry was removed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Returns one page of keys in lexicographic order.
    async fn list(&self, options: ListOptions) -> StoreResult<ListPage>;
}

// == Listing Types ==
/// Parameters for a single listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Only keys starting with this prefix are returned
    pub prefix: Option<String>,
    /// Maximum number of keys on the page
    pub limit: usize,
    /// Opaque continuation token from a previous page
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Options for the first page of an unfiltered listing.
    pub fn new(limit: usize) -> Self {
        Self {
            prefix: None,
            limit,
            cursor: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT)
    }
}

/// A key name and its absolute expiration, as reported by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInfo {
    pub name: String,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage {
    pub keys: Vec<KeyInfo>,
    pub list_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

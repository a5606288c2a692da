//! In-Memory Store Module
//!
//! Ordered key-value storage with lazy TTL expiration and opaque cursors.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::store::{
    current_timestamp_ms, KeyInfo, KvStore, ListOptions, ListPage, StoreResult, StoredEntry,
};

// == Memory Store ==
/// Key-value store kept in process memory.
///
/// Keys are held in a `BTreeMap` so listings come back in lexicographic order.
/// Expired entries stay in the map until read or swept, but are never visible.
#[derive(Debug)]
pub struct MemoryKvStore {
    /// Name the store was configured under
    name: String,
    entries: RwLock<BTreeMap<String, StoredEntry>>,
}

impl MemoryKvStore {
    // == Constructor ==
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the configured store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Purge Expired ==
    /// Removes all expired entries from the map.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of live (unexpired) entries.
    pub async fn len(&self) -> usize {
        let now = current_timestamp_ms();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new("default")
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Ok(Some(serde_json::from_str(&entry.value)?)),
            _ => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &Value, ttl_seconds: Option<u64>) -> StoreResult<()> {
        let serialized = serde_json::to_string(value)?;
        let ttl = ttl_seconds.filter(|ttl| *ttl > 0);
        let entry = StoredEntry::new(serialized, ttl);

        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let removed = self.entries.write().await.remove(key);
        Ok(matches!(removed, Some(entry) if !entry.is_expired()))
    }

    async fn list(&self, options: ListOptions) -> StoreResult<ListPage> {
        if options.limit == 0 {
            return Err(StoreError::Backend(
                "list limit must be greater than zero".to_string(),
            ));
        }

        let prefix = options.prefix.unwrap_or_default();
        let after = options.cursor.as_deref().map(decode_cursor).transpose()?;

        // Keys sharing a prefix are contiguous, so scanning can start at
        // whichever of prefix or cursor sorts later.
        let lower: Bound<&str> = match after.as_deref() {
            Some(after) if after >= prefix.as_str() => Bound::Excluded(after),
            _ => Bound::Included(prefix.as_str()),
        };

        let now = current_timestamp_ms();
        let entries = self.entries.read().await;
        let mut keys: Vec<KeyInfo> = entries
            .range::<str, _>((lower, Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix.as_str()))
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .take(options.limit + 1)
            .map(|(name, entry)| KeyInfo {
                name: name.clone(),
                expiration: entry.expiration_secs(),
            })
            .collect();

        let list_complete = keys.len() <= options.limit;
        keys.truncate(options.limit);

        let cursor = if list_complete {
            None
        } else {
            keys.last().map(|last| encode_cursor(&last.name))
        };

        debug!(
            store = %self.name,
            returned = keys.len(),
            list_complete,
            "listed keys"
        );

        Ok(ListPage {
            keys,
            list_complete,
            cursor,
        })
    }
}

// == Cursor Encoding ==
fn encode_cursor(last_key: &str) -> String {
    URL_SAFE_NO_PAD.encode(last_key.as_bytes())
}

fn decode_cursor(cursor: &str) -> StoreResult<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| StoreError::InvalidCursor(cursor.to_string()))?;
    String::from_utf8(bytes).map_err(|_| StoreError::InvalidCursor(cursor.to_string()))
}

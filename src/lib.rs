//! KV Cache API - bearer-token protected HTTP access to a key-value store
//!
//! Provides get/put/delete/list over a pluggable store with TTL expiration
//! and cursor pagination.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, ConfigError, StoreError};
pub use store::{KvStore, ListOptions, ListPage, MemoryKvStore};
pub use tasks::spawn_cleanup_task;

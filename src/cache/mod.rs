//! Cache Module
//!
//! Volatile TTL cache in front of the catalog store. Entries are opaque
//! serialized snapshots; presence is advisory only and absence never
//! means "the product does not exist".

mod entry;
mod memory;
mod stats;

use async_trait::async_trait;
use thiserror::Error;

pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;

// == Cache Failure ==
/// Cache unavailability. Never surfaced to callers of the service: reads
/// degrade to a store lookup and writes are best-effort.
#[derive(Error, Debug)]
#[error("Cache unavailable: {0}")]
pub struct CacheUnavailable(pub String);

// == Product Cache Contract ==
/// Key/value cache with per-entry expiration.
///
/// Values are opaque serialized blobs; the cache never interprets them.
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Returns the value for a key, or None if absent or expired.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, CacheUnavailable>;

    /// Stores a value under a key with a TTL in seconds, replacing any
    /// existing entry and resetting its lifetime.
    async fn set(
        &self,
        key: &str,
        value: String,
        ttl_secs: u64,
    ) -> std::result::Result<(), CacheUnavailable>;

    /// Removes a key. Deleting an absent key is a no-op, not an error.
    async fn delete(&self, key: &str) -> std::result::Result<(), CacheUnavailable>;

    /// Clears the entire cache namespace.
    async fn flush_all(&self) -> std::result::Result<(), CacheUnavailable>;
}

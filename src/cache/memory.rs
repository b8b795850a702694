//! In-Memory Cache
//!
//! HashMap-backed TTL cache behind its own RwLock. Expired entries are
//! treated as absent on read and physically removed either on access or
//! by the background sweep task.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats, CacheUnavailable, ProductCache};

// == Cache Internals ==
#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Cache ==
/// In-memory TTL cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<CacheInner>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut inner = self.inner.write().await;

        let expired_keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            inner.entries.remove(&key);
        }

        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[async_trait]
impl ProductCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheUnavailable> {
        // Write lock: expired entries are removed on access and the
        // hit/miss counters advance.
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if let Some(entry) = inner.entries.get(key) {
            if entry.is_expired() {
                inner.entries.remove(key);
                inner.stats.set_total_entries(inner.entries.len());
                inner.stats.record_miss();
                Ok(None)
            } else {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Ok(Some(value))
            }
        } else {
            inner.stats.record_miss();
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), CacheUnavailable> {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_secs));
        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheUnavailable> {
        let mut inner = self.inner.write().await;
        // Absent keys delete as a no-op
        inner.entries.remove(key);
        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        Ok(())
    }

    async fn flush_all(&self) -> Result<(), CacheUnavailable> {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        inner.stats.set_total_entries(0);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();

        cache.set("product:1", "snapshot".to_string(), 300).await.unwrap();
        let value = cache.get("product:1").await.unwrap();

        assert_eq!(value, Some("snapshot".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("product:missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_resets_ttl() {
        let cache = MemoryCache::new();

        cache.set("product:1", "old".to_string(), 300).await.unwrap();
        cache.set("product:1", "new".to_string(), 300).await.unwrap();

        assert_eq!(cache.get("product:1").await.unwrap(), Some("new".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let cache = MemoryCache::new();
        cache.set("product:1", "snapshot".to_string(), 300).await.unwrap();

        cache.delete("product:1").await.unwrap();
        assert!(cache.is_empty().await);

        // Deleting an absent key never errors
        cache.delete("product:1").await.unwrap();
        cache.delete("product:never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_flush_all_clears_namespace() {
        let cache = MemoryCache::new();
        cache.set("product:1", "a".to_string(), 300).await.unwrap();
        cache.set("product:2", "b".to_string(), 300).await.unwrap();

        cache.flush_all().await.unwrap();

        assert!(cache.is_empty().await);
        assert_eq!(cache.get("product:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let cache = MemoryCache::new();
        cache.set("product:1", "snapshot".to_string(), 1).await.unwrap();

        assert!(cache.get("product:1").await.unwrap().is_some());

        sleep(Duration::from_millis(1100)).await;

        assert_eq!(cache.get("product:1").await.unwrap(), None);
        // Expired entry was removed on access
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cleanup_expired_removes_only_dead_entries() {
        let cache = MemoryCache::new();
        cache.set("product:1", "a".to_string(), 1).await.unwrap();
        cache.set("product:2", "b".to_string(), 60).await.unwrap();

        sleep(Duration::from_millis(1100)).await;

        let removed = cache.cleanup_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("product:2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache = MemoryCache::new();
        cache.set("product:1", "snapshot".to_string(), 300).await.unwrap();

        cache.get("product:1").await.unwrap(); // hit
        cache.get("product:2").await.unwrap(); // miss

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}

//! Catalog Service
//!
//! Single point of coordination between the catalog store and the cache.
//! Owns the cache-aside read path and the write-through write path.
//!
//! Ordering rules: on reads the cache is consulted strictly before the
//! store; on writes the store is mutated strictly before the cache. A
//! store error aborts the operation before any cache mutation. Cache
//! failures never abort anything: reads fall back to the store, writes
//! log and continue.
//!
//! There is no cross-store transaction. A store write and the following
//! cache write are separate awaits with a window between them, so the
//! cache may briefly trail the store; every such window is bounded by
//! the entry TTL.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::ProductCache;
use crate::error::{CatalogError, Result};
use crate::models::{Product, ProductDraft, ProductId, ProductPatch};
use crate::store::CatalogStore;

// == Cached Product ==
/// A product read result, flagged with whether the snapshot came from
/// the cache.
#[derive(Debug, Clone)]
pub struct CachedProduct {
    pub product: Product,
    pub from_cache: bool,
}

// == Catalog Service ==
/// Orchestrates the store (source of truth) and the cache (read
/// accelerator).
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    cache: Arc<dyn ProductCache>,
    /// TTL in seconds attached to every cache write
    cache_ttl: u64,
}

impl CatalogService {
    // == Constructor ==
    /// Creates a new service over the given store and cache.
    pub fn new(store: Arc<dyn CatalogStore>, cache: Arc<dyn ProductCache>, cache_ttl: u64) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
        }
    }

    // == Create ==
    /// Creates a product after checking name uniqueness against the store.
    ///
    /// The cache is not pre-populated; the first read populates it lazily.
    pub async fn create(&self, mut draft: ProductDraft) -> Result<Product> {
        draft.name = draft.name.trim().to_string();
        draft.description = draft.description.trim().to_string();

        if draft.name.is_empty() {
            return Err(CatalogError::Validation(
                "Product name cannot be empty".to_string(),
            ));
        }
        if draft.description.is_empty() {
            return Err(CatalogError::Validation(
                "Product description cannot be empty".to_string(),
            ));
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(CatalogError::Validation(
                "Product price must be a non-negative number".to_string(),
            ));
        }

        if self.store.find_by_name(&draft.name).await?.is_some() {
            return Err(CatalogError::Duplicate(format!(
                "Product '{}' already exists, update it instead",
                draft.name
            )));
        }

        self.store.insert(draft).await
    }

    // == Get By Id ==
    /// Cache-aside read: cache first, store on miss, populate on the way
    /// out. A "not found" outcome is never cached, so a concurrently
    /// created product is not masked by a stale negative entry.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<CachedProduct> {
        let id = ProductId::parse(raw_id)?;
        let key = id.cache_key();

        match self.cache.get(&key).await {
            Ok(Some(blob)) => match serde_json::from_str::<Product>(&blob) {
                Ok(product) => {
                    debug!(%id, "cache hit");
                    return Ok(CachedProduct {
                        product,
                        from_cache: true,
                    });
                }
                Err(err) => {
                    // Undecodable snapshot: drop it and treat as a miss
                    warn!(%id, %err, "discarding undecodable cache entry");
                    if let Err(err) = self.cache.delete(&key).await {
                        warn!(%id, %err, "failed to drop undecodable cache entry");
                    }
                }
            },
            Ok(None) => {}
            Err(err) => {
                warn!(%id, %err, "cache read failed, falling back to store");
            }
        }

        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product {} not found", id)))?;

        self.cache_snapshot(&key, &product).await;

        Ok(CachedProduct {
            product,
            from_cache: false,
        })
    }

    // == Update ==
    /// Write-through update: the store is patched first; on success the
    /// cache entry is unconditionally overwritten with the fresh snapshot
    /// and a fresh TTL, keeping the cache authoritative immediately after
    /// the write.
    pub async fn update(&self, raw_id: &str, mut patch: ProductPatch) -> Result<Product> {
        let id = ProductId::parse(raw_id)?;

        if let Some(name) = patch.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::Validation(
                    "Product name cannot be empty".to_string(),
                ));
            }
        }
        if let Some(description) = patch.description.as_mut() {
            *description = description.trim().to_string();
            if description.is_empty() {
                return Err(CatalogError::Validation(
                    "Product description cannot be empty".to_string(),
                ));
            }
        }
        if let Some(price) = patch.price {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::Validation(
                    "Product price must be a non-negative number".to_string(),
                ));
            }
        }

        let product = self
            .store
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product {} not found", id)))?;

        self.cache_snapshot(&id.cache_key(), &product).await;

        Ok(product)
    }

    // == Delete ==
    /// Deletes from the store first; only a successful store deletion
    /// touches the cache. Clearing an already-absent cache key is a no-op.
    pub async fn delete(&self, raw_id: &str) -> Result<Product> {
        let id = ProductId::parse(raw_id)?;

        let product = self
            .store
            .delete_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product {} not found", id)))?;

        if let Err(err) = self.cache.delete(&id.cache_key()).await {
            warn!(%id, %err, "failed to clear cache entry after delete");
        }

        Ok(product)
    }

    // == Delete All ==
    /// Empties the store, then flushes the entire cache namespace rather
    /// than enumerating keys.
    pub async fn delete_all(&self) -> Result<Vec<Product>> {
        if self.store.count().await? == 0 {
            return Err(CatalogError::NotFound(
                "No products in the catalog".to_string(),
            ));
        }

        let deleted = self.store.delete_all().await?;

        if let Err(err) = self.cache.flush_all().await {
            warn!(%err, "failed to flush cache after bulk delete");
        }

        Ok(deleted)
    }

    // == List All ==
    /// Always reads through to the store; listings are never cached.
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let products = self.store.list_all().await?;
        if products.is_empty() {
            return Err(CatalogError::NotFound(
                "No products in the catalog".to_string(),
            ));
        }
        Ok(products)
    }

    // == Cache Snapshot ==
    /// Best-effort cache write; a failing cache makes the system slower,
    /// never incorrect.
    async fn cache_snapshot(&self, key: &str, product: &Product) {
        let blob = match serde_json::to_string(product) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(id = %product.id, %err, "failed to serialize product for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, blob, self.cache_ttl).await {
            warn!(id = %product.id, %err, "cache write failed, continuing without it");
        }
    }
}

//! Catalog Store Module
//!
//! The durable repository of product records and the sole source of truth.
//! The capability contract is a trait so the service can be exercised
//! against alternative or failing stores in tests.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Product, ProductDraft, ProductId, ProductPatch};

pub use memory::MemoryStore;

// == Catalog Store Contract ==
/// Durable product repository, keyed by id with a secondary uniqueness
/// check on name.
///
/// All catalog invariants are enforced against this store, never against
/// the cache. Implementations provide their own internal concurrency
/// control; callers take no locks.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Looks up a live product by its natural key.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>>;

    /// Looks up a product by id.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// Inserts a new product, assigning its id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product>;

    /// Applies a partial update and returns the post-update record,
    /// or None if no record matched.
    async fn update_by_id(&self, id: ProductId, patch: ProductPatch) -> Result<Option<Product>>;

    /// Deletes a product and returns its last snapshot, or None if no
    /// record matched.
    async fn delete_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// Deletes every product and returns the deleted records.
    async fn delete_all(&self) -> Result<Vec<Product>>;

    /// Returns the number of live products.
    async fn count(&self) -> Result<usize>;

    /// Returns all products in store order.
    async fn list_all(&self) -> Result<Vec<Product>>;
}

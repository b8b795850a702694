//! In-Memory Catalog Store
//!
//! Vec-backed store implementation preserving insertion order, guarded by
//! its own RwLock. Suitable for tests and single-process deployments; a
//! database-backed implementation slots in behind the same trait.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Product, ProductDraft, ProductId, ProductPatch};
use crate::store::CatalogStore;

// == Memory Store ==
/// In-memory catalog store with insertion-ordered listing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Product>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.name == name).cloned())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product {
            id: ProductId::new(),
            name: draft.name,
            price: draft.price,
            description: draft.description,
        };

        let mut records = self.records.write().await;
        records.push(product.clone());
        Ok(product)
    }

    async fn update_by_id(&self, id: ProductId, patch: ProductPatch) -> Result<Option<Product>> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply_to(product);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let mut records = self.records.write().await;
        match records.iter().position(|p| p.id == id) {
            Some(index) => Ok(Some(records.remove(index))),
            None => Ok(None),
        }
    }

    async fn delete_all(&self) -> Result<Vec<Product>> {
        let mut records = self.records.write().await;
        Ok(std::mem::take(&mut *records))
    }

    async fn count(&self) -> Result<usize> {
        let records = self.records.read().await;
        Ok(records.len())
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}

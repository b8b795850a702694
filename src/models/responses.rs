//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Product;

/// Response body for product creation (POST /api/products/create)
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    /// Success message
    pub message: String,
    /// The created product with its assigned id
    pub product: Product,
}

impl CreateProductResponse {
    /// Creates a new CreateProductResponse
    pub fn new(product: Product) -> Self {
        Self {
            message: format!("Product '{}' created successfully", product.name),
            product,
        }
    }
}

/// Response body for single-product reads (GET /api/products/:id)
#[derive(Debug, Clone, Serialize)]
pub struct GetProductResponse {
    /// The requested product
    pub product: Product,
    /// Whether the snapshot was served from the cache
    pub from_cache: bool,
}

impl GetProductResponse {
    /// Creates a new GetProductResponse
    pub fn new(product: Product, from_cache: bool) -> Self {
        Self {
            product,
            from_cache,
        }
    }
}

/// Response body for the product listing (GET /api/products)
#[derive(Debug, Clone, Serialize)]
pub struct ListProductsResponse {
    /// All products in store order
    pub products: Vec<Product>,
}

impl ListProductsResponse {
    /// Creates a new ListProductsResponse
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

/// Response body for product updates (PUT /api/products/update/:id)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductResponse {
    /// Success message
    pub message: String,
    /// The post-update product record
    pub product: Product,
}

impl UpdateProductResponse {
    /// Creates a new UpdateProductResponse
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product details updated".to_string(),
            product,
        }
    }
}

/// Response body for single-product deletion (DELETE /api/products/delete/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteProductResponse {
    /// Success message
    pub message: String,
    /// Snapshot of the deleted product, for caller confirmation
    pub product: Product,
}

impl DeleteProductResponse {
    /// Creates a new DeleteProductResponse
    pub fn new(product: Product) -> Self {
        Self {
            message: format!("Product '{}' deleted successfully", product.name),
            product,
        }
    }
}

/// Response body for bulk deletion (DELETE /api/products/deleteAll)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResponse {
    /// Success message
    pub message: String,
    /// Number of products deleted
    pub deleted_count: usize,
    /// The deleted product records
    pub products: Vec<Product>,
}

impl DeleteAllResponse {
    /// Creates a new DeleteAllResponse
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            message: "Deleted all products".to_string(),
            deleted_count: products.len(),
            products,
        }
    }
}

/// Response body for the cache stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. Thin collaborators:
//! they parse the boundary and delegate every decision to the service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{
    CreateProductRequest, CreateProductResponse, DeleteAllResponse, DeleteProductResponse,
    GetProductResponse, HealthResponse, ListProductsResponse, StatsResponse,
    UpdateProductRequest, UpdateProductResponse,
};
use crate::service::CatalogService;
use crate::store::MemoryStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog service owning the cache-aside protocol
    pub service: Arc<CatalogService>,
    /// Concrete cache handle, kept for the sweep task and stats
    pub cache: Arc<MemoryCache>,
}

impl AppState {
    /// Creates a new AppState over the given service and cache.
    pub fn new(service: CatalogService, cache: Arc<MemoryCache>) -> Self {
        Self {
            service: Arc::new(service),
            cache,
        }
    }

    /// Creates a new AppState from configuration, wiring the in-memory
    /// store and cache into the service.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(MemoryCache::new());
        let service = CatalogService::new(store, cache.clone(), config.cache_ttl);
        Self::new(service, cache)
    }
}

/// Handler for POST /api/products/create
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<CreateProductResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::Validation(error_msg));
    }

    let product = state.service.create(req.into_draft()).await?;
    Ok(Json(CreateProductResponse::new(product)))
}

/// Handler for GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ListProductsResponse>> {
    let products = state.service.list_all().await?;
    Ok(Json(ListProductsResponse::new(products)))
}

/// Handler for GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetProductResponse>> {
    let read = state.service.get_by_id(&id).await?;
    Ok(Json(GetProductResponse::new(read.product, read.from_cache)))
}

/// Handler for PUT /api/products/update/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<UpdateProductResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::Validation(error_msg));
    }

    let product = state.service.update(&id, req.into_patch()).await?;
    Ok(Json(UpdateProductResponse::new(product)))
}

/// Handler for DELETE /api/products/delete/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>> {
    let product = state.service.delete(&id).await?;
    Ok(Json(DeleteProductResponse::new(product)))
}

/// Handler for DELETE /api/products/deleteAll
pub async fn delete_all_products(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>> {
    let deleted = state.service.delete_all().await?;
    Ok(Json(DeleteAllResponse::new(deleted)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.total_entries,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

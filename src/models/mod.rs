//! Data Models Module
//!
//! Product domain types plus request and response DTOs for the HTTP API.

mod product;
mod requests;
mod responses;

pub use product::{Product, ProductDraft, ProductId, ProductPatch};
pub use requests::{CreateProductRequest, UpdateProductRequest};
pub use responses::{
    CreateProductResponse, DeleteAllResponse, DeleteProductResponse, GetProductResponse,
    HealthResponse, ListProductsResponse, StatsResponse, UpdateProductResponse,
};

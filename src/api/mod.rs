//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `POST /api/products/create` - Create a product
//! - `GET /api/products` - List all products
//! - `GET /api/products/:id` - Fetch a product (cache-aside)
//! - `PUT /api/products/update/:id` - Partially update a product
//! - `DELETE /api/products/delete/:id` - Delete a product
//! - `DELETE /api/products/deleteAll` - Delete every product
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

//! Catalog Service - a product catalog with a TTL read cache
//!
//! Keeps product records consistent across a durable store (source of
//! truth) and a volatile TTL cache: cache-aside on reads, write-through
//! on writes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::CatalogError;
pub use service::CatalogService;
pub use tasks::spawn_cleanup_task;

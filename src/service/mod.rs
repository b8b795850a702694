//! Service Module
//!
//! The catalog service coordinating the durable store and the TTL cache.

mod catalog;

#[cfg(test)]
mod property_tests;

pub use catalog::{CachedProduct, CatalogService};

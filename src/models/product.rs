//! Product Domain Types
//!
//! The product record, its identifier, and the shapes used to create and
//! patch records in the catalog store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

// == Product Id ==
/// Unique, stable product identifier.
///
/// Assigned by the store at insert time and immutable thereafter. Parsing
/// rejects syntactically malformed input as a validation failure so a
/// garbage id never reaches the store as a raw key fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its string form.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| CatalogError::Validation(format!("Invalid product id format: {}", raw)))
    }

    /// Returns the namespaced cache key for this product.
    pub fn cache_key(&self) -> String {
        format!("product:{}", self.0)
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// == Product ==
/// A catalog product record.
///
/// Lives in the catalog store only; the cache merely mirrors serialized
/// snapshots of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: ProductId,
    /// Unique, non-empty display name
    pub name: String,
    /// Non-negative price
    pub price: f64,
    /// Non-empty description
    pub description: String,
}

// == Product Draft ==
/// Fields for a product that has not been inserted yet.
///
/// `name` and `description` are trimmed of surrounding whitespace before
/// they reach the store.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        let name: String = name.into();
        let description: String = description.into();
        Self {
            name: name.trim().to_string(),
            price,
            description: description.trim().to_string(),
        }
    }
}

// == Product Patch ==
/// Partial update for an existing product.
///
/// Unset fields leave the stored values unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Applies the supplied fields onto an existing record.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
    }
}

//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies. Presence and
//! type checks happen at this boundary, before any store access.

use serde::Deserialize;

use crate::models::{ProductDraft, ProductPatch};

/// Request body for product creation (POST /api/products/create)
///
/// # Fields
/// - `name`: Unique product name
/// - `price`: Non-negative price
/// - `description`: Product description
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// The product name
    pub name: String,
    /// The product price
    pub price: f64,
    /// The product description
    pub description: String,
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Some("Product description cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Product price must be a non-negative number".to_string());
        }
        None
    }

    /// Converts into a trimmed draft ready for the service layer.
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft::new(self.name, self.price, self.description)
    }
}

/// Request body for partial product updates (PUT /api/products/update/:id)
///
/// Absent fields leave the stored values unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    /// New product name, if changing
    #[serde(default)]
    pub name: Option<String>,
    /// New price, if changing
    #[serde(default)]
    pub price: Option<f64>,
    /// New description, if changing
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateProductRequest {
    /// Validates the supplied fields
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Some("Product name cannot be empty".to_string());
            }
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Some("Product description cannot be empty".to_string());
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Some("Product price must be a non-negative number".to_string());
            }
        }
        None
    }

    /// Converts into a trimmed patch ready for the service layer.
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name.map(|n| n.trim().to_string()),
            price: self.price,
            description: self.description.map(|d| d.trim().to_string()),
        }
    }
}

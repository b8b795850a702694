//! Error types for the catalog service
//!
//! Provides the typed error taxonomy using thiserror. Cache unavailability
//! is deliberately not part of this enum: the service degrades around a
//! broken cache instead of surfacing it (see `cache::CacheUnavailable`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Missing, mistyped, or malformed input (including malformed ids)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Uniqueness violation on product name
    #[error("Product already exists: {0}")]
    Duplicate(String),

    /// No matching record in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Durable store unavailable or internal fault
    #[error("Store error: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CatalogError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CatalogError::Duplicate(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            CatalogError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CatalogError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = CatalogError::Validation("bad id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_maps_to_403() {
        let response = CatalogError::Duplicate("Widget".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CatalogError::NotFound("product".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_maps_to_500() {
        let response = CatalogError::Store("connection lost".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Seam to the remote storefront API.
//!
//! Two endpoints exist: `GET /api/products` and `POST /api/orders`. The HTTP
//! implementation lives in `lumiere-data`; tests plug in fakes.

use crate::catalog::Product;
use crate::checkout::{OrderRequest, OrderResponse};
use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

/// The remote product and order API.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Submit an order. A returned body may still report `success: false`.
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, FetchError>;
}

/// Body of `GET /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsEnvelope {
    /// Whether the server considers the call successful.
    pub success: bool,
    /// Product array. Kept untyped so a non-array is a distinct error.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ProductsEnvelope {
    /// Unwrap the product list, rejecting `success: false` and non-array data.
    pub fn into_products(self) -> Result<Vec<Product>, FetchError> {
        if !self.success {
            return Err(FetchError::InvalidPayload(
                "products endpoint reported success=false".to_string(),
            ));
        }
        if !self.data.is_array() {
            return Err(FetchError::InvalidPayload(
                "products endpoint returned non-array data".to_string(),
            ));
        }
        Ok(serde_json::from_value(self.data)?)
    }
}

//! `StorefrontApi` over HTTP.

use crate::{ApiConfig, FetchClient, Response};
use async_trait::async_trait;
use lumiere_commerce::catalog::Product;
use lumiere_commerce::checkout::{OrderRequest, OrderResponse};
use lumiere_commerce::{FetchError, ProductsEnvelope, StorefrontApi};
use std::time::Duration;
use tracing::{debug, info};

pub const PRODUCTS_PATH: &str = "/api/products";
pub const ORDERS_PATH: &str = "/api/orders";

/// The remote storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    fetch: FetchClient,
    order_timeout: Duration,
}

impl StorefrontClient {
    /// Build a client for the configured API.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let fetch = FetchClient::new(config.timeout(), &config.user_agent)?
            .with_base_url(config.base_url.clone())
            .with_default_header("Accept", "application/json");
        Ok(Self::new(fetch, config.order_timeout()))
    }

    pub fn new(fetch: FetchClient, order_timeout: Duration) -> Self {
        Self {
            fetch,
            order_timeout,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.fetch.base_url()
    }
}

/// Decode a products response: 2xx, `success: true`, array `data`.
pub(crate) fn parse_products(response: Response) -> Result<Vec<Product>, FetchError> {
    let envelope: ProductsEnvelope = response.error_for_status()?.json()?;
    envelope.into_products()
}

/// Decode an order response. Any non-2xx status is a transport failure,
/// whatever the body says.
pub(crate) fn parse_order(response: Response) -> Result<OrderResponse, FetchError> {
    response.error_for_status()?.json()
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.fetch.get(PRODUCTS_PATH).send().await?;
        let products = parse_products(response)?;
        debug!(count = products.len(), "products fetched");
        Ok(products)
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, FetchError> {
        let response = self
            .fetch
            .post(ORDERS_PATH)
            .json(order)?
            .timeout(self.order_timeout)
            .send()
            .await?;
        let body = parse_order(response)?;
        info!(success = body.success, "order endpoint answered");
        Ok(body)
    }
}

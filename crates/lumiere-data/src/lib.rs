//! HTTP client for the Lumiere storefront API.
//!
//! Wraps `reqwest` with a base URL, default headers and a request timeout,
//! and implements [`StorefrontApi`](lumiere_commerce::StorefrontApi) on top
//! of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumiere_data::{ApiConfig, StorefrontClient};
//! use lumiere_commerce::prelude::*;
//!
//! let config = ApiConfig::default().with_base_url("https://shop.example.com");
//! let client = StorefrontClient::from_config(&config)?;
//!
//! let products = client.fetch_products().await?;
//! ```

mod client;
mod config;
mod error;
mod response;

pub use client::{StorefrontClient, ORDERS_PATH, PRODUCTS_PATH};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_ORDER_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
pub use error::ConfigError;
pub use lumiere_commerce::FetchError;
pub use response::Response;

use error::map_reqwest_error;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP methods the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// HTTP client for outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self {
            http,
            base_url: None,
            default_headers: HashMap::new(),
        })
    }

    /// Prepend `base_url` to every relative path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url_for(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }

    pub fn get(&self, url: &str) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    pub fn post(&self, url: &str) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Start a request with the default headers applied.
    pub fn request(&self, method: Method, url: &str) -> ClientRequestBuilder {
        let url = self.url_for(url);
        let mut inner = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        for (key, value) in &self.default_headers {
            inner = inner.header(key.as_str(), value.as_str());
        }

        ClientRequestBuilder { method, url, inner }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    method: Method,
    url: String,
    inner: reqwest::RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the body as JSON with a matching Content-Type.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let body = serde_json::to_vec(value)?;
        self.inner = self
            .inner
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        Ok(self)
    }

    /// Override the client timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        debug!(method = self.method.as_str(), url = %self.url, "sending request");
        let resp = self.inner.send().await.map_err(map_reqwest_error)?;
        let response = Response::read(resp).await?;
        debug!(status = response.status, url = %self.url, "response received");
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiConfig, FetchClient, FetchError, Method, Response, StorefrontClient};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FetchClient {
        FetchClient::new(Duration::from_secs(5), "lumiere-test").unwrap()
    }

    #[test]
    fn test_url_for_joins_base() {
        let client = client().with_base_url("http://localhost:3000/");
        assert_eq!(client.url_for("/api/products"), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_url_for_absolute_passthrough() {
        let client = client().with_base_url("http://localhost:3000");
        assert_eq!(
            client.url_for("https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
    }

    #[test]
    fn test_url_for_without_base() {
        assert_eq!(client().url_for("/api/orders"), "/api/orders");
        assert_eq!(client().base_url(), None);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }
}

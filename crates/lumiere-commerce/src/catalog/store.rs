//! Catalog store: the product list currently known to the session.

use crate::api::StorefrontApi;
use crate::catalog::{fixture_products, Product};
use crate::error::FetchError;
use crate::ids::ProductId;
use crate::search::{categories, SearchQuery};
use std::collections::HashSet;
use tracing::{info, warn};

/// Load state of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// A product list is held.
    Loaded,
    /// The initial load failed; products cannot be shown until a retry.
    Failed(String),
}

/// Holds the product list and answers stock queries.
///
/// Every successful load replaces the whole list. References into a
/// previous list are not carried over.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    status: CatalogStatus,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the built-in fixture.
    pub fn from_fixture() -> Self {
        Self::from_products(fixture_products())
    }

    /// Create a store holding the given products.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut store = Self::new();
        store.replace(products);
        store
    }

    /// Fetch the product list and replace the held collection.
    ///
    /// On failure a previously loaded list is left untouched; if nothing
    /// was loaded yet the store is flagged as failed.
    pub async fn load(&mut self, api: &dyn StorefrontApi) -> Result<&[Product], FetchError> {
        let fetched = api.fetch_products().await.and_then(|products| {
            check_products(&products)?;
            Ok(products)
        });

        match fetched {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.replace(products);
                Ok(&self.products)
            }
            Err(e) => {
                if self.is_loaded() {
                    warn!(error = %e, "catalog refresh failed, keeping previous products");
                } else {
                    warn!(error = %e, "catalog load failed");
                    self.status = CatalogStatus::Failed(e.to_string());
                }
                Err(e)
            }
        }
    }

    fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.status = CatalogStatus::Loaded;
    }

    /// All held products, in API order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Stock on hand; zero for unknown ids.
    pub fn stock_of(&self, id: ProductId) -> u32 {
        self.product(id).map_or(0, |p| p.stock_quantity)
    }

    /// Current load state.
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Check if a product list is held.
    pub fn is_loaded(&self) -> bool {
        self.status == CatalogStatus::Loaded
    }

    /// Error message of a failed initial load.
    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Number of held products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if no products are held.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `"All"` followed by distinct categories.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.products)
    }

    /// Products matching a search query.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }
}

/// Reject payloads that break the product invariants.
fn check_products(products: &[Product]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(FetchError::InvalidPayload(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if product.price.is_negative() {
            return Err(FetchError::InvalidPayload(format!(
                "negative price for product {}",
                product.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{OrderRequest, OrderResponse};
    use crate::money::Money;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves queued product-list results in order.
    struct QueuedApi {
        results: Mutex<Vec<Result<Vec<Product>, FetchError>>>,
    }

    impl QueuedApi {
        fn new(mut results: Vec<Result<Vec<Product>, FetchError>>) -> Self {
            results.reverse();
            Self {
                results: Mutex::new(results),
            }
        }
    }

    #[async_trait]
    impl StorefrontApi for QueuedApi {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.results
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(FetchError::Request("no more results".to_string())))
        }

        async fn place_order(&self, _order: &OrderRequest) -> Result<OrderResponse, FetchError> {
            Err(FetchError::Request("not used".to_string()))
        }
    }

    fn ring(id: i64, stock: u32) -> Product {
        Product::new(id, "Rings", format!("Ring {}", id), Money::new(1000)).with_stock(stock)
    }

    #[tokio::test]
    async fn test_load_replaces_products() {
        let api = QueuedApi::new(vec![Ok(vec![ring(1, 2), ring(2, 0)]), Ok(vec![ring(3, 5)])]);
        let mut store = CatalogStore::new();

        store.load(&api).await.unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.is_loaded());

        store.load(&api).await.unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.product(ProductId::new(1)).is_none());
        assert_eq!(store.stock_of(ProductId::new(3)), 5);
    }

    #[tokio::test]
    async fn test_initial_load_failure_flags_store() {
        let api = QueuedApi::new(vec![Err(FetchError::Connection("refused".to_string()))]);
        let mut store = CatalogStore::new();

        assert!(store.load(&api).await.is_err());
        assert!(store.is_empty());
        assert!(store.load_error().unwrap().contains("refused"));
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_products() {
        let api = QueuedApi::new(vec![
            Ok(vec![ring(1, 2)]),
            Err(FetchError::Http {
                status: 503,
                message: "unavailable".to_string(),
            }),
        ]);
        let mut store = CatalogStore::new();
        store.load(&api).await.unwrap();

        assert!(store.load(&api).await.is_err());
        assert!(store.is_loaded());
        assert_eq!(store.stock_of(ProductId::new(1)), 2);
        assert!(store.load_error().is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_ids() {
        let api = QueuedApi::new(vec![Ok(vec![ring(1, 2), ring(1, 3)])]);
        let mut store = CatalogStore::new();

        let result = store.load(&api).await;
        assert!(matches!(result, Err(FetchError::InvalidPayload(_))));
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_stock_of_unknown_is_zero() {
        let store = CatalogStore::from_products(vec![ring(1, 4)]);
        assert_eq!(store.stock_of(ProductId::new(1)), 4);
        assert_eq!(store.stock_of(ProductId::new(99)), 0);
    }

    #[test]
    fn test_fixture_store_is_loaded() {
        let store = CatalogStore::from_fixture();
        assert!(store.is_loaded());
        assert_eq!(store.len(), 9);
        assert_eq!(store.categories()[0], "All");
    }
}

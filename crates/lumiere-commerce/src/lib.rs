//! Storefront domain logic for Lumiere, a small jewelry shop.
//!
//! This crate holds everything between the product API and the view layer:
//!
//! - **Catalog**: Products, stock availability, the catalog store
//! - **Cart**: Stock-aware cart with line subtotals and checkout totals
//! - **Checkout**: Form, validator, shipping fees, order submission
//! - **Search**: Text search and category filter over the catalog
//!
//! Network access goes through the [`StorefrontApi`] trait; `lumiere-data`
//! provides the HTTP implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumiere_commerce::prelude::*;
//!
//! let mut shop = Storefront::new(CheckoutPolicy::default());
//! shop.load_catalog(&client).await?;
//!
//! shop.add_to_cart(ProductId::new(1))?;
//! shop.set_form_field(FormField::Pincode, "560001")?;
//!
//! let summary = shop.summary()?;
//! println!("Total: {}", summary.grand_total.display());
//!
//! let confirmation = shop.checkout(&client).await?;
//! ```

pub mod api;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod storefront;

pub use api::{ProductsEnvelope, StorefrontApi};
pub use error::{CartError, CheckoutError, FetchError, OrderSubmitError, ValidationError};
pub use ids::*;
pub use money::{Money, CURRENCY_CODE, CURRENCY_SYMBOL};
pub use storefront::{CheckoutPolicy, Storefront, DEFAULT_ORDER_TIMEOUT};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::StorefrontApi;
    pub use crate::error::{CartError, CheckoutError, FetchError, OrderSubmitError, ValidationError};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::storefront::{CheckoutPolicy, Storefront};

    // Catalog
    pub use crate::catalog::{fixture_products, Availability, CatalogStatus, CatalogStore, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, CheckoutSummary, StockSource};

    // Checkout
    pub use crate::checkout::{
        shipping_tier, validate_checkout, CheckoutForm, FormField, OrderConfirmation, OrderItem,
        OrderRequest, OrderResponse, OrderSubmitter, ShippingZone, SubmissionState,
    };

    // Search
    pub use crate::search::{categories, CategoryFilter, SearchQuery};
}

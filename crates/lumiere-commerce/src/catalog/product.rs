//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as served by `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Category name (e.g., "Rings").
    pub category: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Marketing copy shown under the name.
    #[serde(default)]
    pub story: String,
    /// Units the retailer has on hand.
    pub stock_quantity: u32,
}

impl Product {
    /// Create a product with no story and no stock.
    pub fn new(
        id: i64,
        category: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            category: category.into(),
            name: name.into(),
            price,
            story: String::new(),
            stock_quantity: 0,
        }
    }

    /// Set the story.
    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    /// Set the stock quantity.
    pub fn with_stock(mut self, stock_quantity: u32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// Check if the retailer has any units at all.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

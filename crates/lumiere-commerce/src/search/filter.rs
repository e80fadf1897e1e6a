//! Category filter.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Label of the catch-all category.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection for the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly one category, matched case-sensitively.
    Named(String),
}

impl CategoryFilter {
    /// Build from a category label; `"All"` selects everything.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// Label as shown in the category list.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Check if a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out[1..].contains(&product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, category: &str) -> Product {
        Product::new(id, category, "Item", Money::new(100))
    }

    #[test]
    fn test_categories_first_seen_order() {
        let products = vec![
            product(1, "Rings"),
            product(2, "Earrings"),
            product(3, "Rings"),
            product(4, "Necklaces"),
        ];
        assert_eq!(categories(&products), vec!["All", "Rings", "Earrings", "Necklaces"]);
    }

    #[test]
    fn test_categories_empty_catalog() {
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_category_filter_matches() {
        let ring = product(1, "Rings");
        assert!(CategoryFilter::All.matches(&ring));
        assert!(CategoryFilter::from_label("Rings").matches(&ring));
        assert!(!CategoryFilter::from_label("rings").matches(&ring));
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    }
}

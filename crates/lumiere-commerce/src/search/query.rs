//! Product search query.

use crate::catalog::Product;
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Free-text search plus category selection.
///
/// The text is matched case-insensitively as a substring of either the
/// product name or its category; the category filter is applied after.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text typed into the search box. Empty matches everything.
    pub text: String,
    /// Selected category.
    pub category: CategoryFilter,
}

impl SearchQuery {
    /// Create an empty query (everything matches).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Check if a product matches.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.category.matches(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        let needle = self.text.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle)
    }

    /// Matching products, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture_products;

    fn names(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let products = fixture_products();
        assert_eq!(SearchQuery::new().apply(&products).len(), products.len());
    }

    #[test]
    fn test_text_matches_name_case_insensitive() {
        let products = fixture_products();
        let found = SearchQuery::new().with_text("SAPPHIRE").apply(&products);
        assert_eq!(names(found), vec!["Sapphire Pendant", "Sapphire Drop Earrings"]);
    }

    #[test]
    fn test_text_matches_category() {
        let products = fixture_products();
        let found = SearchQuery::new().with_text("earrings").apply(&products);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| p.category == "Earrings"));
    }

    #[test]
    fn test_text_then_category() {
        let products = fixture_products();
        let found = SearchQuery::new()
            .with_text("pearl")
            .with_category(CategoryFilter::from_label("Earrings"))
            .apply(&products);
        assert_eq!(names(found), vec!["Pearl Hoops"]);
    }

    #[test]
    fn test_no_match() {
        let products = fixture_products();
        assert!(SearchQuery::new().with_text("watch").apply(&products).is_empty());
    }
}

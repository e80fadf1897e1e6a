//! Built-in jewelry catalog used when no remote API is configured.

use crate::catalog::Product;
use crate::money::Money;

/// Raw fixture rows: id, category, name, price, story, stock.
const FIXTURE: [(i64, &str, &str, i64, &str, u32); 9] = [
    (1, "Rings", "Diamond Solitaire Ring", 45000, "Timeless elegance with a brilliant-cut diamond set in 18K gold", 4),
    (2, "Rings", "Emerald Cluster Ring", 38000, "Vibrant emeralds surrounded by sparkling diamonds", 3),
    (3, "Rings", "Ruby Eternity Band", 52000, "Continuous row of precious rubies symbolizing eternal love", 2),
    (4, "Necklaces", "Pearl Strand Necklace", 28000, "Lustrous freshwater pearls in a classic design", 6),
    (5, "Necklaces", "Sapphire Pendant", 42000, "Deep blue sapphire centerpiece on delicate gold chain", 3),
    (6, "Necklaces", "Diamond Rivi\u{e8}re", 95000, "Graduated diamond necklace showcasing exceptional brilliance", 1),
    (7, "Earrings", "Diamond Studs", 35000, "Classic round brilliant diamonds in platinum settings", 5),
    (8, "Earrings", "Sapphire Drop Earrings", 48000, "Elegant drops featuring Ceylon sapphires and diamonds", 2),
    (9, "Earrings", "Pearl Hoops", 22000, "Modern hoops adorned with cultured pearls", 8),
];

/// Build the fixture product list.
pub fn fixture_products() -> Vec<Product> {
    FIXTURE
        .iter()
        .map(|&(id, category, name, price, story, stock)| {
            Product::new(id, category, name, Money::new(price))
                .with_story(story)
                .with_stock(stock)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let products = fixture_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fixture_has_three_categories() {
        let products = fixture_products();
        let categories: HashSet<_> = products.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories.len(), 3);
        assert!(products.iter().all(|p| p.is_in_stock()));
    }
}

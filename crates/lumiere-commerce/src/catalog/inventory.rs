//! Stock availability.
//!
//! `Availability` is the one derived view of "how many more can be bought".
//! The cart's mutation guard and anything that renders a product both read
//! it, so the two can never disagree.

use serde::{Deserialize, Serialize};

/// Stock on hand versus units already committed to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    /// Units the retailer has on hand.
    pub stock: u32,
    /// Units of the same product already in the cart.
    pub in_cart: u32,
}

impl Availability {
    /// Create an availability view.
    pub fn new(stock: u32, in_cart: u32) -> Self {
        Self { stock, in_cart }
    }

    /// Units still addable (stock minus cart).
    ///
    /// Negative when a catalog refresh lowered stock below what the cart
    /// already holds.
    pub fn available(&self) -> i64 {
        i64::from(self.stock) - i64::from(self.in_cart)
    }

    /// Check if at least one more unit can be added.
    pub fn can_add(&self) -> bool {
        self.available() > 0
    }

    /// Check if a specific number of additional units can be added.
    pub fn can_add_units(&self, units: u32) -> bool {
        self.available() >= i64::from(units)
    }

    /// Check if nothing more can be added.
    pub fn is_out_of_stock(&self) -> bool {
        self.available() <= 0
    }

    /// Check if the cart holds more than the current stock.
    pub fn is_oversold(&self) -> bool {
        self.available() < 0
    }

    /// Check if only a few units remain (1..=threshold).
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        let available = self.available();
        available > 0 && available <= i64::from(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_subtracts_cart() {
        let avail = Availability::new(5, 2);
        assert_eq!(avail.available(), 3);
        assert!(avail.can_add());
        assert!(avail.can_add_units(3));
        assert!(!avail.can_add_units(4));
    }

    #[test]
    fn test_availability_exhausted() {
        let avail = Availability::new(2, 2);
        assert_eq!(avail.available(), 0);
        assert!(avail.is_out_of_stock());
        assert!(!avail.can_add());
        assert!(!avail.is_oversold());
    }

    #[test]
    fn test_availability_oversold_after_refresh() {
        let avail = Availability::new(1, 3);
        assert_eq!(avail.available(), -2);
        assert!(avail.is_oversold());
        assert!(avail.is_out_of_stock());
    }

    #[test]
    fn test_low_stock() {
        assert!(Availability::new(3, 1).is_low_stock(2));
        assert!(!Availability::new(10, 1).is_low_stock(2));
        assert!(!Availability::new(1, 1).is_low_stock(2));
    }

    #[test]
    fn test_unknown_product_is_out_of_stock() {
        let avail = Availability::default();
        assert!(avail.is_out_of_stock());
    }
}

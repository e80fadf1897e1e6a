//! Money type for representing monetary values.
//!
//! The storefront trades in a single fixed currency (Indian rupees) and
//! every amount is a whole integer in that currency's smallest traded unit.
//! Arithmetic is checked; callers turn `None` into an overflow error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO code of the storefront currency.
pub const CURRENCY_CODE: &str = "INR";

/// Display symbol of the storefront currency.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// An amount of money in the storefront currency.
///
/// Serialized as a bare integer, matching the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in minor units.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount.checked_mul(factor).map(Money::new)
    }

    /// Format with symbol and Indian digit grouping (e.g., "₹1,23,456").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "45,000").
    pub fn display_amount(&self) -> String {
        let grouped = group_indian(self.amount.unsigned_abs());
        if self.is_negative() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group digits the en-IN way: the last three together, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_serializes_as_integer() {
        let m = Money::new(45000);
        assert_eq!(serde_json::to_string(&m).unwrap(), "45000");
        let back: Money = serde_json::from_str("38000").unwrap();
        assert_eq!(back, Money::new(38000));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(0).display(), "\u{20b9}0");
        assert_eq!(Money::new(500).display(), "\u{20b9}500");
        assert_eq!(Money::new(45000).display(), "\u{20b9}45,000");
        assert_eq!(Money::new(123456).display(), "\u{20b9}1,23,456");
        assert_eq!(Money::new(9500000).display_amount(), "95,00,000");
        assert_eq!(Money::new(-2500).display_amount(), "-2,500");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(1000);
        assert_eq!(a.try_add(&Money::new(500)), Some(Money::new(1500)));
        assert_eq!(a.try_multiply(3), Some(Money::new(3000)));
        assert_eq!(Money::new(i64::MAX).try_add(&Money::new(1)), None);
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }
}

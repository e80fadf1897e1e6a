//! Shopping cart module.
//!
//! Contains the cart, its lines, and the totals derived from them.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, StockSource};
pub use pricing::{CartTotals, CheckoutSummary};

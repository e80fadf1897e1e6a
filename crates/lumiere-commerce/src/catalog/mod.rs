//! Product catalog module.
//!
//! Contains the product type, stock availability, the catalog store and
//! the built-in fixture catalog.

mod fixture;
mod inventory;
mod product;
mod store;

pub use fixture::fixture_products;
pub use inventory::Availability;
pub use product::Product;
pub use store::{CatalogStatus, CatalogStore};

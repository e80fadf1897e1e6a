//! Search module.
//!
//! Client-side text search and category filtering over the loaded catalog.

mod filter;
mod query;

pub use filter::{categories, CategoryFilter, ALL_CATEGORIES};
pub use query::SearchQuery;

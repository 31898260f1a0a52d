//! `vitrina-core` — catalog domain building blocks.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no rendering):
//! the product and category records as fetched from the upstream API, and the
//! query-parameter value the pipeline is driven by.

pub mod category;
pub mod params;
pub mod product;

pub use category::Category;
pub use params::{CategoryFilter, QueryParams, SortKey, PAGE_SIZE};
pub use product::Product;

//! `vitrina-catalog` — record store and query engine.
//!
//! The store holds the raw fetched records; the query engine derives
//! filtered, sorted, paginated views from them as pure functions of
//! (records, parameters). Views are recomputed on every call, never cached.

pub mod query;
pub mod store;

pub use query::{
    filter_products, has_next_page, page_count, paginate, run_query, sort_products, QueryOutput,
};
pub use store::CatalogStore;

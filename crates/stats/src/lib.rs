//! `vitrina-stats` — aggregate statistics over a product view.
//!
//! Everything here is recomputed from scratch on each call over the full
//! filtered/sorted view (pre-pagination); nothing is cached or incremental.

pub mod charts;
pub mod summary;

pub use charts::{
    category_breakdown, top_price_series, top_stock_series, CategorySlice, SeriesPoint,
};
pub use summary::CatalogStats;

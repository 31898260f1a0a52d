//! `vitrina-fetch` — HTTP ingestion of the product and category lists.
//!
//! Deliberately dumb: two independent GETs at startup, no retry, no timeout
//! tuning, no coordination between them. A failed fetch logs a warning and
//! leaves its side of the store empty for the life of the process.

pub mod client;

pub use client::{CatalogClient, FetchError, DEFAULT_BASE_URL};

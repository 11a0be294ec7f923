//! Pagination policy resolution
//!
//! Turns an operation descriptor plus raw client arguments into an
//! effective offset/limit window for the query engine. Backward cursor
//! requests (`before`/`last`) are resolved here into an equivalent forward
//! window, so downstream components treat every request uniformly by
//! offset.

mod resolver;

pub use resolver::{PolicyResolver, ResolvedPagination};

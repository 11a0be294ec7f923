//! Paginator abstraction
//!
//! Supports: full paginators (total count known) and partial paginators
//! (fill heuristic only)
//!
//! # Overview
//!
//! A paginator is a read-only view over one page of an already-executed
//! query: the page's items, the zero-based offset of the first item within
//! the full result set, and the page size. The full variant additionally
//! knows the total item count; the partial variant deliberately avoids the
//! cost of a count query and only exposes a "page looks full" heuristic.

mod types;

pub use types::{ArrayPaginator, PartialPaginator};

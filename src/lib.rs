// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # pagekit
//!
//! Cursor and page pagination normalization for collection-returning API
//! operations. Sits between a data-query engine and a serialization layer
//! and turns heterogeneous paginator results into two uniform output
//! shapes: Relay-style cursor connections and offset/page collections.
//!
//! ## Features
//!
//! - **Opaque cursors**: reversible base64 offset tokens with strict
//!   client-input validation
//! - **Two paginator capabilities**: full paginators with a memoized total
//!   count, partial paginators with a cheap fill heuristic
//! - **Two output shapes**: `Connection` (edges + pageInfo + totalCount)
//!   and `Page` (collection + paginationInfo)
//! - **Policy resolution**: `first`/`after`/`last`/`before` and
//!   `page`/`itemsPerPage` arguments resolved into one offset/limit window
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::normalizer::{Normalizer, OperationResult};
//! use pagekit::paginator::ArrayPaginator;
//! use pagekit::types::{CollectionArgs, Operation};
//! use serde_json::json;
//!
//! # fn main() -> pagekit::Result<()> {
//! let results = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
//! let paginator = ArrayPaginator::new(results, 0, 2.0);
//!
//! let normalizer = Normalizer::identity();
//! let connection = normalizer.process(
//!     OperationResult::Full(paginator),
//!     &Operation::query_collection("Book"),
//!     &CollectionArgs::new(),
//! )?;
//!
//! assert!(connection.is_connection());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Collection Normalizer                   │
//! │  process(result, operation, args) → Connection | Page       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────────┴────────────┬───────────────────┐
//! │  Cursor   │        Paginator            │    Serializer     │
//! ├───────────┼─────────────────────────────┼───────────────────┤
//! │ encode    │ ArrayPaginator (total)      │ ItemSerializer    │
//! │ decode    │ PartialPaginator (heuristic)│ called per item   │
//! └───────────┴─────────────────────────────┴───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types: operation descriptors and client arguments
pub mod types;

/// Pagination configuration options
pub mod config;

/// Opaque cursor codec
pub mod cursor;

/// Paginator abstraction (full and partial capabilities)
pub mod paginator;

/// Pagination policy resolution
pub mod policy;

/// Serializer boundary
pub mod serialize;

/// Collection normalization
pub mod normalizer;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use normalizer::{
    Connection, Edge, Normalized, Normalizer, OperationResult, Page, PageInfo, PaginationInfo,
};
pub use paginator::{ArrayPaginator, PartialPaginator};
pub use types::{CollectionArgs, Operation, OperationKind, PaginationKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

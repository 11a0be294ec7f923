//! Common types
//!
//! Operation descriptors and client-supplied pagination arguments shared by
//! the policy resolver and the collection normalizer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Operation Descriptor
// ============================================================================

/// Kind of API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Single-item query
    Query,
    /// Collection-returning query
    QueryCollection,
    /// Mutation
    Mutation,
    /// Subscription
    Subscription,
}

/// Pagination shape for collection-returning operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationKind {
    /// Relay-style cursor connection (edges + pageInfo)
    #[default]
    Cursor,
    /// Page-number collection (collection + paginationInfo)
    Page,
}

/// Describes one API operation with its resolved pagination type
///
/// The metadata layer resolves which pagination type and page size apply to
/// an operation; this descriptor carries that decision into normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Resource name the operation targets (e.g., "Book")
    pub resource: String,
    /// Kind of operation
    pub kind: OperationKind,
    /// Resolved pagination type (collection operations only)
    pub pagination_type: PaginationKind,
}

impl Operation {
    /// Create a single-item query operation
    pub fn query(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            kind: OperationKind::Query,
            pagination_type: PaginationKind::default(),
        }
    }

    /// Create a collection query operation (cursor-paginated by default)
    pub fn query_collection(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            kind: OperationKind::QueryCollection,
            pagination_type: PaginationKind::default(),
        }
    }

    /// Create a mutation operation
    pub fn mutation(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            kind: OperationKind::Mutation,
            pagination_type: PaginationKind::default(),
        }
    }

    /// Create a subscription operation
    pub fn subscription(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            kind: OperationKind::Subscription,
            pagination_type: PaginationKind::default(),
        }
    }

    /// Set the pagination type
    #[must_use]
    pub fn with_pagination_type(mut self, pagination_type: PaginationKind) -> Self {
        self.pagination_type = pagination_type;
        self
    }

    /// Check if this operation returns a collection
    pub fn is_collection(&self) -> bool {
        self.kind == OperationKind::QueryCollection
    }
}

// ============================================================================
// Client Arguments
// ============================================================================

/// Client-supplied pagination arguments
///
/// Cursor mode uses `first`/`after` (forward) and `last`/`before`
/// (backward); page mode uses `page`/`itemsPerPage`. Raw cursor strings are
/// kept as-is here; decoding happens during resolution and normalization so
/// malformed tokens surface as client errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionArgs {
    /// Number of items to fetch, counting forward
    pub first: Option<u32>,
    /// Cursor to start after (forward pagination)
    pub after: Option<String>,
    /// Number of items to fetch, counting backward
    pub last: Option<u32>,
    /// Cursor to end before (backward pagination)
    pub before: Option<String>,
    /// Page number, starting at 1 (page-based pagination)
    pub page: Option<u32>,
    /// Client-requested page size (page-based pagination)
    pub items_per_page: Option<f64>,
}

impl CollectionArgs {
    /// Create empty arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `first` argument
    #[must_use]
    pub fn with_first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the `after` cursor
    #[must_use]
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Set the `last` argument
    #[must_use]
    pub fn with_last(mut self, last: u32) -> Self {
        self.last = Some(last);
        self
    }

    /// Set the `before` cursor
    #[must_use]
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Set the `page` argument
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the `itemsPerPage` argument
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: f64) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }
}

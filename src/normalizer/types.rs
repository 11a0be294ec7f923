//! Normalized output structures
//!
//! Immutable value structures produced fresh per request. Field names and
//! optional-field omission follow the wire contract interoperating clients
//! expect: absent counts are left out entirely, absent cursors serialize as
//! null.

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Cursor Mode (Relay connection)
// ============================================================================

/// One item of a cursor-paginated result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Normalized item representation
    pub node: Value,
    /// Opaque cursor addressing this item's offset
    pub cursor: String,
}

/// Position metadata for a cursor-paginated page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first edge, null on an empty page
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, null on an empty page
    pub end_cursor: Option<String>,
    /// Whether more items exist after this page
    pub has_next_page: bool,
    /// Whether items exist before this page
    pub has_previous_page: bool,
}

/// Relay-style cursor connection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Total item count; omitted when the paginator does not know it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<f64>,
    /// One edge per selected item, in source order
    pub edges: Vec<Edge>,
    /// Page position metadata
    pub page_info: PageInfo,
}

// ============================================================================
// Page Mode
// ============================================================================

/// Pagination metadata for a page-mode result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Requested page size
    pub items_per_page: f64,
    /// Total item count; omitted when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<f64>,
    /// Last page number (always >= 1); omitted when the total is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<f64>,
}

/// Page-mode collection result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Normalized items, in source order
    pub collection: Vec<Value>,
    /// Pagination metadata
    pub pagination_info: PaginationInfo,
}

// ============================================================================
// Result Envelope
// ============================================================================

/// Output of one normalization call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    /// Single-item result (non-collection operations)
    Item(Value),
    /// Cursor-mode collection result
    Connection(Connection),
    /// Page-mode collection result
    Page(Page),
}

impl Normalized {
    /// Check if this is a single-item result
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Check if this is a cursor-mode result
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Check if this is a page-mode result
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    /// Borrow the connection, if this is a cursor-mode result
    pub fn as_connection(&self) -> Option<&Connection> {
        match self {
            Self::Connection(connection) => Some(connection),
            _ => None,
        }
    }

    /// Borrow the page, if this is a page-mode result
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }
}

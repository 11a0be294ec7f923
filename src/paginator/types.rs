//! Paginator types
//!
//! The two paginator capabilities consumed by the collection normalizer.

use once_cell::unsync::OnceCell;
use serde_json::Value;

// ============================================================================
// Full Paginator
// ============================================================================

/// In-memory paginator over a complete result set (total count known)
///
/// Holds the full, ordered result set and exposes one page of it as a
/// window. The total item count is computed lazily on first access and
/// memoized for the lifetime of the instance; a paginator is built once per
/// request and read-only thereafter, so the cached value is a snapshot.
#[derive(Debug, Clone)]
pub struct ArrayPaginator {
    results: Vec<Value>,
    offset: usize,
    items_per_page: f64,
    window: std::ops::Range<usize>,
    total_items: OnceCell<f64>,
}

impl ArrayPaginator {
    /// Create a paginator over `results`, windowed at `offset` with at most
    /// `items_per_page` items
    ///
    /// A page size of zero yields an empty window, as does an offset past
    /// the end of the result set.
    pub fn new(results: Vec<Value>, offset: usize, items_per_page: f64) -> Self {
        let window = if items_per_page > 0.0 && offset < results.len() {
            let end = offset
                .saturating_add(items_per_page as usize)
                .min(results.len());
            offset..end
        } else {
            0..0
        };

        Self {
            results,
            offset,
            items_per_page,
            window,
            total_items: OnceCell::new(),
        }
    }

    /// The current page's items, in source order
    pub fn items(&self) -> &[Value] {
        &self.results[self.window.clone()]
    }

    /// Number of items on the current page
    pub fn count(&self) -> usize {
        self.window.len()
    }

    /// Zero-based index of the first page item within the full result set
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Requested page size
    pub fn items_per_page(&self) -> f64 {
        self.items_per_page
    }

    /// Total number of items in the full result set
    ///
    /// Computed on first access and cached for the lifetime of this
    /// instance; never recomputed.
    pub fn total_items(&self) -> f64 {
        *self.total_items.get_or_init(|| self.results.len() as f64)
    }

    /// Number of the last page, always >= 1
    ///
    /// An empty result set still reports page 1 as the last page, and a
    /// page size of zero collapses everything onto a single page.
    pub fn last_page(&self) -> f64 {
        if self.items_per_page <= 0.0 {
            return 1.0;
        }

        (self.total_items() / self.items_per_page).ceil().max(1.0)
    }
}

// ============================================================================
// Partial Paginator
// ============================================================================

/// Paginator over a single page when the total count is unknown
///
/// Produced by query engines that skip the count query for cost reasons.
/// Instead of a total it exposes [`has_more_heuristic`], which reports
/// whether the page was filled exactly to the requested size — a hint, not
/// an authoritative signal, that more data may follow.
///
/// [`has_more_heuristic`]: PartialPaginator::has_more_heuristic
#[derive(Debug, Clone)]
pub struct PartialPaginator {
    items: Vec<Value>,
    offset: usize,
    items_per_page: f64,
}

impl PartialPaginator {
    /// Create a partial paginator over one page of items
    pub fn new(items: Vec<Value>, offset: usize, items_per_page: f64) -> Self {
        Self {
            items,
            offset,
            items_per_page,
        }
    }

    /// The page's items, in source order
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of items on this page
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Zero-based index of the first page item within the full result set
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Requested page size
    pub fn items_per_page(&self) -> f64 {
        self.items_per_page
    }

    /// Whether more data may exist beyond this page
    ///
    /// True iff the page was filled exactly to the requested size. A page
    /// size of zero never reports more data.
    pub fn has_more_heuristic(&self) -> bool {
        self.items_per_page > 0.0 && self.count() as f64 == self.items_per_page
    }
}

//! Policy resolver implementation

use tracing::debug;

use crate::config::PaginationOptions;
use crate::cursor;
use crate::error::{Error, Result};
use crate::types::{CollectionArgs, Operation, PaginationKind};

/// The effective pagination decision for one request
///
/// The query engine applies this window when fetching the page; the
/// normalizer consumes the same decision (plus the raw cursor strings)
/// when assembling the output structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPagination {
    /// Effective pagination type
    pub kind: PaginationKind,
    /// Zero-based offset of the requested window
    pub offset: u64,
    /// Requested window size
    pub limit: f64,
}

/// Resolves client pagination arguments against configured options
#[derive(Debug, Clone, Default)]
pub struct PolicyResolver {
    options: PaginationOptions,
}

impl PolicyResolver {
    /// Create a resolver with the given options
    pub fn new(options: PaginationOptions) -> Self {
        Self { options }
    }

    /// The options this resolver applies
    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Resolve the effective offset/limit window for an operation
    ///
    /// Cursor decode failures from `after`/`before` propagate as client
    /// errors.
    pub fn resolve(
        &self,
        operation: &Operation,
        args: &CollectionArgs,
    ) -> Result<ResolvedPagination> {
        let resolved = match operation.pagination_type {
            PaginationKind::Cursor => self.resolve_cursor(args)?,
            PaginationKind::Page => self.resolve_page(args)?,
        };

        debug!(
            resource = %operation.resource,
            kind = ?resolved.kind,
            offset = resolved.offset,
            limit = resolved.limit,
            "resolved pagination window"
        );

        Ok(resolved)
    }

    fn resolve_cursor(&self, args: &CollectionArgs) -> Result<ResolvedPagination> {
        let requested = match (args.first, args.last) {
            (Some(first), _) => f64::from(first),
            (None, Some(last)) => f64::from(last),
            (None, None) => self.options.items_per_page,
        };
        let limit = self.options.clamp(requested);

        let offset = if let Some(after) = &args.after {
            // The codec accepts a cursor for u64::MAX; the window past it
            // pins to the end of the offset range instead of wrapping
            cursor::decode(after)?.saturating_add(1)
        } else if let Some(before) = &args.before {
            // The window ends just before the cursor
            cursor::decode(before)?.saturating_sub(limit as u64)
        } else {
            // A bare `last` is anchored to the end of the result set; the
            // query engine resolves it against the total it knows.
            0
        };

        Ok(ResolvedPagination {
            kind: PaginationKind::Cursor,
            offset,
            limit,
        })
    }

    fn resolve_page(&self, args: &CollectionArgs) -> Result<ResolvedPagination> {
        let page = args.page.unwrap_or(1);
        if page < 1 {
            return Err(Error::argument("page", "must be >= 1"));
        }

        let limit = match args.items_per_page {
            Some(requested) if self.options.client_items_per_page => {
                if requested < 0.0 {
                    return Err(Error::argument("itemsPerPage", "must be >= 0"));
                }
                self.options.clamp(requested)
            }
            _ => self.options.items_per_page,
        };

        // The f64 -> u64 cast saturates for oversized client page sizes, so
        // the offset math must too
        Ok(ResolvedPagination {
            kind: PaginationKind::Page,
            offset: u64::from(page - 1).saturating_mul(limit as u64),
            limit,
        })
    }
}

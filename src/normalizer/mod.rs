//! Collection normalization
//!
//! Supports: cursor mode (Relay connections), page mode (offset/page
//! collections), single-item pass-through
//!
//! # Overview
//!
//! The normalizer is the orchestration component of the crate: it receives
//! the query engine's result, dispatches on the operation's resolved
//! pagination type and the paginator capability the result provides, and
//! assembles the output structure, delegating item-level transformation to
//! the serializer boundary. Normalization either fully succeeds or fails
//! before any output is returned.

mod connection;
mod page;
mod types;

pub use types::{Connection, Edge, Normalized, Page, PageInfo, PaginationInfo};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::paginator::{ArrayPaginator, PartialPaginator};
use crate::serialize::{IdentitySerializer, ItemSerializer, SerializerContext};
use crate::types::{CollectionArgs, Operation, PaginationKind};


// ============================================================================
// Operation Result
// ============================================================================

/// Raw result handed over by the query engine
///
/// Collection operations must supply one of the two paginator capabilities;
/// anything else violates the data-provider contract and is rejected during
/// dispatch.
#[derive(Debug, Clone)]
pub enum OperationResult {
    /// A single item (or an unpaginated value)
    Item(Value),
    /// A page with the total count known
    Full(ArrayPaginator),
    /// A page without a total count
    Partial(PartialPaginator),
}

impl OperationResult {
    /// Check if this result carries a paginator capability
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Full(_) | Self::Partial(_))
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Normalizes operation results into their output structures
pub struct Normalizer {
    serializer: Box<dyn ItemSerializer>,
}

impl Normalizer {
    /// Create a normalizer delegating item transformation to `serializer`
    pub fn new(serializer: impl ItemSerializer + 'static) -> Self {
        Self {
            serializer: Box::new(serializer),
        }
    }

    /// Create a normalizer that passes items through unchanged
    pub fn identity() -> Self {
        Self::new(IdentitySerializer)
    }

    /// Normalize one operation result
    ///
    /// Non-collection operations (single-item queries, mutations,
    /// subscriptions) bypass all pagination logic: the item is serialized
    /// and returned directly. Collection operations dispatch on the
    /// paginator capability and the operation's pagination type.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedCollectionType`] when a collection operation's
    /// result carries no paginator capability; [`Error::EmptyCursor`] /
    /// [`Error::InvalidCursor`] when a client-supplied `after`/`before`
    /// token is malformed.
    pub fn process(
        &self,
        result: OperationResult,
        operation: &Operation,
        args: &CollectionArgs,
    ) -> Result<Normalized> {
        let context = SerializerContext::for_operation(operation);

        if !operation.is_collection() {
            return match result {
                OperationResult::Item(item) => {
                    let node = self.serializer.serialize(&item, &context)?;
                    Ok(Normalized::Item(node))
                }
                OperationResult::Full(_) | OperationResult::Partial(_) => {
                    Err(Error::Other(format!(
                        "paginated result supplied to non-collection operation on '{}'",
                        operation.resource
                    )))
                }
            };
        }

        debug!(
            resource = %operation.resource,
            pagination = ?operation.pagination_type,
            "normalizing collection result"
        );

        match (operation.pagination_type, result) {
            (_, OperationResult::Item(_)) => Err(Error::UnsupportedCollectionType),
            (PaginationKind::Cursor, OperationResult::Full(paginator)) => {
                connection::from_full(&paginator, args, self.serializer.as_ref(), &context)
                    .map(Normalized::Connection)
            }
            (PaginationKind::Cursor, OperationResult::Partial(paginator)) => {
                connection::from_partial(&paginator, args, self.serializer.as_ref(), &context)
                    .map(Normalized::Connection)
            }
            (PaginationKind::Page, OperationResult::Full(paginator)) => {
                page::from_full(&paginator, self.serializer.as_ref(), &context)
                    .map(Normalized::Page)
            }
            (PaginationKind::Page, OperationResult::Partial(paginator)) => {
                page::from_partial(&paginator, self.serializer.as_ref(), &context)
                    .map(Normalized::Page)
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

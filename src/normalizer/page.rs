//! Page-mode normalization
//!
//! Builds an offset/page collection from a paginator window. Total count
//! and last page are reported only when the paginator actually knows the
//! total; a partial paginator's metadata carries the page size alone.

use serde_json::Value;

use super::types::{Page, PaginationInfo};
use crate::error::Result;
use crate::paginator::{ArrayPaginator, PartialPaginator};
use crate::serialize::{ItemSerializer, SerializerContext};

/// Build a page from a full paginator
pub(crate) fn from_full(
    paginator: &ArrayPaginator,
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Page> {
    Ok(Page {
        collection: serialize_items(paginator.items(), serializer, context)?,
        pagination_info: PaginationInfo {
            items_per_page: paginator.items_per_page(),
            total_count: Some(paginator.total_items()),
            last_page: Some(paginator.last_page()),
        },
    })
}

/// Build a page from a partial paginator
pub(crate) fn from_partial(
    paginator: &PartialPaginator,
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Page> {
    Ok(Page {
        collection: serialize_items(paginator.items(), serializer, context)?,
        pagination_info: PaginationInfo {
            items_per_page: paginator.items_per_page(),
            total_count: None,
            last_page: None,
        },
    })
}

fn serialize_items(
    items: &[Value],
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| serializer.serialize(item, context))
        .collect()
}

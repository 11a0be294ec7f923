//! Cursor-mode normalization
//!
//! Builds a Relay-style connection from a paginator window. Every request
//! reaches this point as a plain offset window; backward cursors were
//! already turned into an equivalent window by the policy resolver.

use serde_json::Value;

use super::types::{Connection, Edge, PageInfo};
use crate::cursor;
use crate::error::Result;
use crate::paginator::{ArrayPaginator, PartialPaginator};
use crate::serialize::{ItemSerializer, SerializerContext};
use crate::types::CollectionArgs;

/// Build a connection from a full paginator
pub(crate) fn from_full(
    paginator: &ArrayPaginator,
    args: &CollectionArgs,
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Connection> {
    // Malformed client cursors must fail before any output is assembled
    decode_args(args)?;

    let offset = paginator.offset() as u64;
    let count = paginator.count() as u64;
    let edges = build_edges(paginator.items(), offset, serializer, context)?;

    let has_next_page = ((offset + count) as f64) < paginator.total_items();

    Ok(Connection {
        total_count: Some(paginator.total_items()),
        page_info: page_info(&edges, offset, has_next_page),
        edges,
    })
}

/// Build a connection from a partial paginator
///
/// A partial paginator cannot know its absolute position when the client
/// paged in with a cursor, so the effective offset is derived from `after`
/// when present. The total count stays out of the output entirely and
/// has-next-page falls back to the fill heuristic; no extra upstream query
/// is ever issued for it.
pub(crate) fn from_partial(
    paginator: &PartialPaginator,
    args: &CollectionArgs,
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Connection> {
    let (after, _before) = decode_args(args)?;

    let offset = match after {
        // Saturating: decode accepts a cursor for u64::MAX
        Some(after) => after.saturating_add(1),
        None => paginator.offset() as u64,
    };
    let edges = build_edges(paginator.items(), offset, serializer, context)?;

    Ok(Connection {
        total_count: None,
        page_info: page_info(&edges, offset, paginator.has_more_heuristic()),
        edges,
    })
}

/// Decode the raw `after`/`before` tokens, propagating client errors
fn decode_args(args: &CollectionArgs) -> Result<(Option<u64>, Option<u64>)> {
    let after = args.after.as_deref().map(cursor::decode).transpose()?;
    let before = args.before.as_deref().map(cursor::decode).transpose()?;
    Ok((after, before))
}

/// Serialize each item and pair it with its absolute-offset cursor
fn build_edges(
    items: &[Value],
    offset: u64,
    serializer: &dyn ItemSerializer,
    context: &SerializerContext,
) -> Result<Vec<Edge>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Ok(Edge {
                node: serializer.serialize(item, context)?,
                cursor: cursor::encode(offset.saturating_add(i as u64)),
            })
        })
        .collect()
}

fn page_info(edges: &[Edge], offset: u64, has_next_page: bool) -> PageInfo {
    PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_next_page,
        has_previous_page: offset > 0,
    }
}

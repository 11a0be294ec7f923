//! End-to-end normalization tests
//!
//! Drives the full flow for every operation/paginator combination: query
//! engine result → paginator → normalizer → serializer → output shape.

use pagekit::cursor;
use pagekit::normalizer::{Normalizer, OperationResult};
use pagekit::paginator::{ArrayPaginator, PartialPaginator};
use pagekit::serialize::SerializerContext;
use pagekit::types::{CollectionArgs, Operation, PaginationKind};
use pagekit::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

/// Serializer that replaces every item with a fixed marker, so assertions
/// can tell normalized nodes apart from raw items
fn marker_normalizer() -> Normalizer {
    Normalizer::new(
        |_: &Value, _: &SerializerContext| -> pagekit::Result<Value> {
            Ok(json!(["normalized_item"]))
        },
    )
}

fn three_items() -> Vec<Value> {
    vec![
        json!({"test": "a"}),
        json!({"test": "b"}),
        json!({"test": "c"}),
    ]
}

fn cursor_operation() -> Operation {
    Operation::query_collection("Foo")
}

fn page_operation() -> Operation {
    Operation::query_collection("Foo").with_pagination_type(PaginationKind::Page)
}

fn process(
    normalizer: &Normalizer,
    result: OperationResult,
    operation: &Operation,
    args: &CollectionArgs,
) -> pagekit::Result<Value> {
    let normalized = normalizer.process(result, operation, args)?;
    Ok(serde_json::to_value(&normalized).unwrap())
}

// ============================================================================
// Non-Collection Operations
// ============================================================================

#[test]
fn test_item_operations_are_serialized_directly() {
    let normalizer = marker_normalizer();

    for operation in [
        Operation::query("Foo"),
        Operation::mutation("Foo"),
        Operation::subscription("Foo"),
    ] {
        let output = process(
            &normalizer,
            OperationResult::Item(json!({"id": 7})),
            &operation,
            &CollectionArgs::new(),
        )
        .unwrap();
        assert_eq!(output, json!(["normalized_item"]));
    }
}

// ============================================================================
// Cursor Mode
// ============================================================================

#[test]
fn test_cursor_not_a_paginator() {
    let err = marker_normalizer()
        .process(
            OperationResult::Item(json!([])),
            &cursor_operation(),
            &CollectionArgs::new(),
        )
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedCollectionType));
    assert_eq!(
        err.to_string(),
        "Collection returned by the collection data provider must implement the full or partial paginator capability."
    );
}

#[test]
fn test_cursor_empty_paginator() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(vec![], 0, 0.0)),
        &cursor_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "totalCount": 0.0,
            "edges": [],
            "pageInfo": {
                "startCursor": null,
                "endCursor": null,
                "hasNextPage": false,
                "hasPreviousPage": false
            }
        })
    );
}

#[test]
fn test_cursor_paginator_first_page() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 0, 2.0)),
        &cursor_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "totalCount": 3.0,
            "edges": [
                {"node": ["normalized_item"], "cursor": "MA=="},
                {"node": ["normalized_item"], "cursor": "MQ=="}
            ],
            "pageInfo": {
                "startCursor": "MA==",
                "endCursor": "MQ==",
                "hasNextPage": true,
                "hasPreviousPage": false
            }
        })
    );
}

#[test]
fn test_cursor_paginator_with_after_cursor() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 1, 2.0)),
        &cursor_operation(),
        &CollectionArgs::new().with_after("MA=="),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "totalCount": 3.0,
            "edges": [
                {"node": ["normalized_item"], "cursor": "MQ=="},
                {"node": ["normalized_item"], "cursor": "Mg=="}
            ],
            "pageInfo": {
                "startCursor": "MQ==",
                "endCursor": "Mg==",
                "hasNextPage": false,
                "hasPreviousPage": true
            }
        })
    );
}

#[test]
fn test_cursor_paginator_with_before_cursor() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 1, 1.0)),
        &cursor_operation(),
        &CollectionArgs::new().with_before("Mg=="),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "totalCount": 3.0,
            "edges": [
                {"node": ["normalized_item"], "cursor": "MQ=="}
            ],
            "pageInfo": {
                "startCursor": "MQ==",
                "endCursor": "MQ==",
                "hasNextPage": true,
                "hasPreviousPage": true
            }
        })
    );
}

#[test]
fn test_cursor_paginator_with_last() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 1, 2.0)),
        &cursor_operation(),
        &CollectionArgs::new().with_last(2),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "totalCount": 3.0,
            "edges": [
                {"node": ["normalized_item"], "cursor": "MQ=="},
                {"node": ["normalized_item"], "cursor": "Mg=="}
            ],
            "pageInfo": {
                "startCursor": "MQ==",
                "endCursor": "Mg==",
                "hasNextPage": false,
                "hasPreviousPage": true
            }
        })
    );
}

#[test_case("after", "-", "Cursor - is invalid" ; "bad after cursor")]
#[test_case("after", "", "Empty cursor is invalid" ; "empty after cursor")]
#[test_case("before", "-", "Cursor - is invalid" ; "bad before cursor")]
#[test_case("before", "", "Empty cursor is invalid" ; "empty before cursor")]
fn test_cursor_invalid_client_cursor(argument: &str, token: &str, message: &str) {
    let args = match argument {
        "after" => CollectionArgs::new().with_after(token),
        _ => CollectionArgs::new().with_before(token),
    };

    let err = marker_normalizer()
        .process(
            OperationResult::Full(ArrayPaginator::new(vec![], 0, 0.0)),
            &cursor_operation(),
            &args,
        )
        .unwrap_err();

    assert_eq!(err.to_string(), message);
    assert!(err.is_client_error());
}

#[test]
fn test_cursor_partial_paginator() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Partial(PartialPaginator::new(
            vec![json!({"test": "a"}), json!({"test": "b"})],
            0,
            2.0,
        )),
        &cursor_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    // No totalCount; has-next comes from the fill heuristic
    assert_eq!(
        output,
        json!({
            "edges": [
                {"node": ["normalized_item"], "cursor": "MA=="},
                {"node": ["normalized_item"], "cursor": "MQ=="}
            ],
            "pageInfo": {
                "startCursor": "MA==",
                "endCursor": "MQ==",
                "hasNextPage": true,
                "hasPreviousPage": false
            }
        })
    );
}

#[test]
fn test_cursor_partial_paginator_with_after_cursor() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Partial(PartialPaginator::new(
            vec![json!({"test": "b"}), json!({"test": "c"})],
            0,
            2.0,
        )),
        &cursor_operation(),
        &CollectionArgs::new().with_after("MA=="),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "edges": [
                {"node": ["normalized_item"], "cursor": "MQ=="},
                {"node": ["normalized_item"], "cursor": "Mg=="}
            ],
            "pageInfo": {
                "startCursor": "MQ==",
                "endCursor": "Mg==",
                "hasNextPage": true,
                "hasPreviousPage": true
            }
        })
    );
}

#[test]
fn test_cursor_partial_paginator_underfilled() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Partial(PartialPaginator::new(vec![json!({"test": "a"})], 0, 2.0)),
        &cursor_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(output["pageInfo"]["hasNextPage"], json!(false));
    assert!(output.get("totalCount").is_none());
}

// ============================================================================
// Page Mode
// ============================================================================

#[test]
fn test_page_not_a_paginator() {
    let err = marker_normalizer()
        .process(
            OperationResult::Item(json!([])),
            &page_operation(),
            &CollectionArgs::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCollectionType));
}

#[test]
fn test_page_empty_paginator() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(vec![], 0, 0.0)),
        &page_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "collection": [],
            "paginationInfo": {
                "itemsPerPage": 0.0,
                "totalCount": 0.0,
                "lastPage": 1.0
            }
        })
    );
}

#[test]
fn test_page_paginator_first_page() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 0, 2.0)),
        &page_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "collection": [["normalized_item"], ["normalized_item"]],
            "paginationInfo": {
                "itemsPerPage": 2.0,
                "totalCount": 3.0,
                "lastPage": 2.0
            }
        })
    );
}

#[test]
fn test_page_paginator_last_page() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(ArrayPaginator::new(three_items(), 2, 2.0)),
        &page_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "collection": [["normalized_item"]],
            "paginationInfo": {
                "itemsPerPage": 2.0,
                "totalCount": 3.0,
                "lastPage": 2.0
            }
        })
    );
}

#[test]
fn test_page_partial_paginator() {
    let output = process(
        &marker_normalizer(),
        OperationResult::Partial(PartialPaginator::new(
            vec![json!({"test": "a"}), json!({"test": "b"})],
            0,
            2.0,
        )),
        &page_operation(),
        &CollectionArgs::new(),
    )
    .unwrap();

    assert_eq!(
        output,
        json!({
            "collection": [["normalized_item"], ["normalized_item"]],
            "paginationInfo": {
                "itemsPerPage": 2.0
            }
        })
    );
}

// ============================================================================
// Resolver + Normalizer Round Trip
// ============================================================================

#[test]
fn test_resolved_window_feeds_the_paginator() {
    use pagekit::config::PaginationOptions;
    use pagekit::policy::PolicyResolver;

    let resolver = PolicyResolver::new(PaginationOptions::new().with_items_per_page(2.0));
    let operation = cursor_operation();
    let args = CollectionArgs::new().with_after(cursor::encode(0));

    // The query engine applies the resolved window...
    let resolved = resolver.resolve(&operation, &args).unwrap();
    assert_eq!(resolved.offset, 1);
    assert_eq!(resolved.limit, 2.0);

    // ...and the normalizer consumes the same window plus raw cursors
    let paginator = ArrayPaginator::new(three_items(), resolved.offset as usize, resolved.limit);
    let output = process(
        &marker_normalizer(),
        OperationResult::Full(paginator),
        &operation,
        &args,
    )
    .unwrap();

    assert_eq!(output["pageInfo"]["hasPreviousPage"], json!(true));
    assert_eq!(output["pageInfo"]["hasNextPage"], json!(false));
    assert_eq!(output["pageInfo"]["startCursor"], json!(cursor::encode(1)));
    assert_eq!(output["pageInfo"]["endCursor"], json!(cursor::encode(2)));
}

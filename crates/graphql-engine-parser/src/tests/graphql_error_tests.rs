//! Tests for [`crate::GraphQLError`] construction, display and
//! serialization.

use crate::parse;
use crate::GraphQLError;
use crate::PathSegment;
use crate::Source;
use crate::SourceLocation;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug)]
struct Upstream;

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("upstream failed")
    }
}

impl std::error::Error for Upstream {}

#[test]
fn display_includes_source_excerpt() {
    let source = Arc::new(Source::new("line one\nline two\nline three"));
    let err = GraphQLError::new("msg").with_source_positions(source, vec![14]);
    assert_eq!(err.locations(), &[SourceLocation::new(2, 6)]);
    assert_eq!(
        err.to_string(),
        "msg\n\nGraphQL request:2:6\n1 | line one\n2 | line two\n  |      ^\n3 | line three",
    );
}

#[test]
fn display_honours_location_offset() {
    let source = Source::with_name("a\nb", "Foo.graphql")
        .with_location_offset(SourceLocation::new(10, 5));
    let err = GraphQLError::new("msg").with_source_positions(Arc::new(source), vec![0]);
    assert_eq!(
        err.to_string(),
        "msg\n\nFoo.graphql:10:5\n10 |     a\n   |     ^\n11 | b",
    );
}

#[test]
fn display_chunks_long_lines() {
    let body = format!("{{ {} }}", "a".repeat(150));
    let source = Arc::new(Source::new(body));
    let err = GraphQLError::new("msg").with_source_positions(source, vec![100]);
    let printed = err.to_string();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines[2], "GraphQL request:1:101");
    assert!(lines[3].starts_with("1 | { aaa"));
    assert_eq!(lines[5], format!("  | {}", " ".repeat(20) + "^"));
}

#[test]
fn locations_come_from_nodes() {
    let doc = parse("{\n  a\n  b\n}").unwrap();
    let op = doc.operations().next().unwrap();
    let err = GraphQLError::new("two nodes").with_nodes(
        op.selection_set
            .selections
            .iter()
            .map(|selection| selection.loc()),
    );
    assert_eq!(
        err.locations(),
        &[SourceLocation::new(2, 3), SourceLocation::new(3, 3)],
    );
    assert_eq!(err.positions(), &[4, 8]);
    assert_eq!(err.nodes().len(), 2);
    assert!(err.source().is_some());
}

#[test]
fn formatted_and_serialized_shape() {
    let source = Arc::new(Source::new("{ a }"));
    let err = GraphQLError::new("boom")
        .with_source_positions(source, vec![2])
        .with_path(vec![PathSegment::from("a"), PathSegment::from(0usize)])
        .with_extensions(json!({"code": "E"}).as_object().unwrap().clone());
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({
            "message": "boom",
            "locations": [{"line": 1, "column": 3}],
            "path": ["a", 0],
            "extensions": {"code": "E"},
        }),
    );

    let bare = GraphQLError::new("bare");
    assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"message": "bare"}));
}

#[test]
fn original_error_is_the_error_source() {
    let err = GraphQLError::new("wrapped").with_original_error(Arc::new(Upstream));
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "upstream failed");
    assert!(err.original_error().is_some());
}

#[test]
fn equality_ignores_original_error() {
    let a = GraphQLError::new("same").with_original_error(Arc::new(Upstream));
    let b = GraphQLError::new("same");
    assert_eq!(a, b);
    assert_ne!(a, GraphQLError::new("same").with_path(vec!["x".into()]));
}

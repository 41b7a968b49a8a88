//! Tests for [`crate::Source`] position tracking.

use crate::Source;
use crate::SourceLocation;

#[test]
fn get_location_counts_lines_and_columns() {
    let source = Source::new("ab\ncd\r\nef\rgh");
    assert_eq!(source.get_location(0), SourceLocation::new(1, 1));
    assert_eq!(source.get_location(1), SourceLocation::new(1, 2));
    assert_eq!(source.get_location(3), SourceLocation::new(2, 1));
    assert_eq!(source.get_location(7), SourceLocation::new(3, 1));
    assert_eq!(source.get_location(10), SourceLocation::new(4, 1));
}

#[test]
fn get_location_between_cr_and_lf() {
    let source = Source::new("a\r\nb");
    assert_eq!(source.get_location(3), SourceLocation::new(2, 1));
}

#[test]
fn get_location_counts_characters() {
    let source = Source::new("\"é\" x");
    assert_eq!(source.get_location(5), SourceLocation::new(1, 5));
}

#[test]
fn get_location_clamps_past_the_end() {
    let source = Source::new("abc");
    assert_eq!(source.get_location(100), SourceLocation::new(1, 4));
}

#[test]
fn names_and_offsets() {
    assert_eq!(Source::new("{ a }").name(), "GraphQL request");
    let source = Source::with_name("{ a }", "Query.graphql")
        .with_location_offset(SourceLocation::new(0, 0));
    assert_eq!(source.name(), "Query.graphql");
    assert_eq!(source.location_offset(), SourceLocation::new(1, 1));
}

use super::CANONICAL_SDL;
use crate::utilities::build_client_schema;
use crate::utilities::build_schema;
use crate::utilities::introspection_from_schema;
use crate::utilities::print_schema;
use crate::utilities::IntrospectionOptions;
use crate::SchemaBuildError;
use serde_json::json;

#[test]
fn client_schema_prints_like_its_source() {
    let server = build_schema(CANONICAL_SDL).unwrap();
    let introspection = introspection_from_schema(&server, IntrospectionOptions::full()).unwrap();
    let client = build_client_schema(&introspection).unwrap();
    assert_eq!(print_schema(&client), CANONICAL_SDL);
}

#[test]
fn client_schema_keeps_roots_and_possible_types() {
    let server = build_schema(CANONICAL_SDL).unwrap();
    let introspection = introspection_from_schema(&server, IntrospectionOptions::full()).unwrap();
    let client = build_client_schema(&introspection).unwrap();

    assert_eq!(client.query_type().map(|ty| ty.name.as_str()), Some("Query"));
    assert!(client.mutation_type().is_none());
    let node = client.get_type("Node").unwrap();
    let possible = client
        .possible_types(node)
        .into_iter()
        .map(|object| object.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(possible, vec!["User"]);
}

#[test]
fn client_schemas_reintrospect_identically() {
    let server = build_schema(CANONICAL_SDL).unwrap();
    let first = introspection_from_schema(&server, IntrospectionOptions::full()).unwrap();
    let client = build_client_schema(&first).unwrap();
    let second = introspection_from_schema(&client, IntrospectionOptions::full()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_schema_data_is_rejected() {
    let error = build_client_schema(&json!({"data": {}})).unwrap_err();
    assert!(
        matches!(error, SchemaBuildError::InvalidIntrospection { .. }),
        "{error:?}",
    );
}

#[test]
fn incomplete_type_entries_are_rejected() {
    let error = build_client_schema(&json!({
        "__schema": {
            "queryType": {"name": "Query"},
            "types": [{"name": "Query"}],
            "directives": [],
        },
    }))
    .unwrap_err();
    assert!(
        error
            .to_string()
            .contains("Ensure that a full introspection query is used"),
        "{error}",
    );
}

use crate::utilities::build_schema;
use crate::utilities::extend_schema;
use crate::utilities::print_schema;
use crate::utilities::print_type;
use crate::utilities::BuildSchemaOptions;
use crate::SchemaBuildError;
use graphql_engine_parser::parse;

const BASE_SDL: &str = "type Query {\n  a: String\n}\n\nenum E {\n  X\n}";

#[test]
fn extensions_add_fields_values_and_types() {
    let schema = build_schema(BASE_SDL).unwrap();
    let extended = extend_schema(
        &schema,
        &parse("extend type Query { b: Int } extend enum E { Y } type New { n: E }").unwrap(),
        BuildSchemaOptions::default(),
    )
    .unwrap();

    let query = extended.get_type("Query").unwrap();
    assert_eq!(
        print_type(query, &extended),
        "type Query {\n  a: String\n  b: Int\n}",
    );
    let e = extended.get_type("E").unwrap();
    assert_eq!(print_type(e, &extended), "enum E {\n  X\n  Y\n}");
    assert!(extended.get_type("New").is_some());
}

#[test]
fn the_original_schema_is_untouched() {
    let schema = build_schema(BASE_SDL).unwrap();
    let _extended = extend_schema(
        &schema,
        &parse("extend type Query { b: Int }").unwrap(),
        BuildSchemaOptions::default(),
    )
    .unwrap();
    assert_eq!(print_schema(&schema), BASE_SDL);
}

#[test]
fn schema_extensions_add_roots() {
    let schema = build_schema(BASE_SDL).unwrap();
    let extended = extend_schema(
        &schema,
        &parse("type Mutation { set(a: String): String } extend schema { mutation: Mutation }")
            .unwrap(),
        BuildSchemaOptions::default(),
    )
    .unwrap();
    assert_eq!(
        extended.mutation_type().map(|ty| ty.name.as_str()),
        Some("Mutation"),
    );
    assert!(schema.mutation_type().is_none());
}

#[test]
fn new_directives_are_added() {
    let schema = build_schema(BASE_SDL).unwrap();
    let extended = extend_schema(
        &schema,
        &parse("directive @audit(by: String) on FIELD_DEFINITION").unwrap(),
        BuildSchemaOptions::default(),
    )
    .unwrap();
    assert!(extended.get_directive("audit").is_some());
    assert!(schema.get_directive("audit").is_none());
}

#[test]
fn invalid_extensions_are_rejected() {
    let schema = build_schema(BASE_SDL).unwrap();
    let error = extend_schema(
        &schema,
        &parse("extend type Missing { a: Int }").unwrap(),
        BuildSchemaOptions::default(),
    )
    .unwrap_err();
    let SchemaBuildError::InvalidSdl { errors } = error else {
        panic!("expected an SDL error, got {error:?}");
    };
    assert_eq!(
        errors.iter().map(|error| error.message()).collect::<Vec<_>>(),
        vec!["Cannot extend type 'Missing' because it is not defined."],
    );
}

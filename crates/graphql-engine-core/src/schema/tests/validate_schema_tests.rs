use crate::schema::assert_valid_schema;
use crate::schema::validate_schema;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::ObjectType;
use crate::utilities::build_schema;

fn schema_messages(schema: &Schema) -> Vec<String> {
    let mut messages = validate_schema(schema)
        .iter()
        .map(|error| error.message().to_string())
        .collect::<Vec<_>>();
    messages.sort();
    messages
}

#[test]
fn valid_schemas_have_no_errors() {
    let schema = build_schema(
        "type Query { node(id: ID!): Node search(term: String = \"\"): [Result!]! }
         interface Node { id: ID! }
         type User implements Node { id: ID! name: String }
         union Result = User
         input Filter { next: Filter }",
    )
    .unwrap();
    assert!(validate_schema(&schema).is_empty());
    assert!(assert_valid_schema(&schema).is_ok());
}

#[test]
fn query_root_is_required() {
    let schema = Schema::new(
        SchemaConfig::new().add_type(ObjectType::new("Foo").field(Field::new("a", "String"))),
    )
    .unwrap();
    assert_eq!(schema_messages(&schema), ["Query root type must be provided."]);
}

#[test]
fn type_level_rules() {
    let schema = build_schema(
        "type Query { t: T u: U i: In }
         interface I { x: Int }
         type T implements I { y: Int }
         union U = T | I
         input In { self: In! }",
    )
    .unwrap();
    assert_eq!(
        schema_messages(&schema),
        [
            "Cannot reference Input Object 'In' within itself through a series of non-null \
            fields: 'self'.",
            "Interface field I.x expected but T does not provide it.",
            "Union type U can only include Object types, it cannot include I.",
        ],
    );
}

#[test]
fn reserved_names_and_empty_types() {
    let schema = Schema::new(
        SchemaConfig::new()
            .query(ObjectType::new("Query").field(Field::new("__bad", "String")))
            .add_type(ObjectType::new("Empty"))
            .add_type(EnumType::new("__Mood")),
    )
    .unwrap();
    assert_eq!(
        schema_messages(&schema),
        [
            "Enum type __Mood must define one or more values.",
            "Name '__Mood' must not begin with '__', which is reserved by GraphQL introspection.",
            "Name '__bad' must not begin with '__', which is reserved by GraphQL introspection.",
            "Type Empty must define one or more fields.",
        ],
    );
}

#[test]
fn errors_are_computed_once_and_joined_by_assert() {
    let schema = build_schema("type Query { a(x: Query): String b: [Query]! }").unwrap();
    let first = validate_schema(&schema);
    assert!(std::ptr::eq(first, validate_schema(&schema)));

    let error = assert_valid_schema(&schema).unwrap_err();
    assert_eq!(
        error.message(),
        "The type of Query.a(x:) must be Input Type but got: Query.",
    );
}

#[test]
fn assume_valid_skips_validation() {
    let schema = Schema::new(
        SchemaConfig::new()
            .add_type(ObjectType::new("Empty"))
            .assume_valid(true),
    )
    .unwrap();
    assert!(validate_schema(&schema).is_empty());
}

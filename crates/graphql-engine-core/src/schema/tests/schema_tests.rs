use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::Field;
use crate::types::FieldMap;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::UnionType;
use crate::utilities::build_schema;
use crate::SchemaBuildError;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

fn names(schema: &Schema) -> Vec<&str> {
    schema.type_map().keys().map(String::as_str).collect()
}

#[test]
fn type_map_follows_discovery_order() {
    let dog = ObjectType::new("Dog").field(Field::new("name", "String"));
    let schema = Schema::new(
        SchemaConfig::new()
            .query(ObjectType::new("Query").field(Field::new("pet", "Pet")))
            .add_type(dog)
            .add_type(UnionType::new("Pet").member("Dog")),
    )
    .unwrap();

    let names = names(&schema);
    assert_eq!(names[..4], ["Dog", "String", "Pet", "Query"]);
    for expected in ["Boolean", "__Schema", "__Type", "__TypeKind", "__DirectiveLocation"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    assert!(schema.get_type("Int").is_none());
}

#[test]
fn unknown_type_references_fail_construction() {
    let result = Schema::new(
        SchemaConfig::new().query(ObjectType::new("Query").field(Field::new("pet", "Missing"))),
    );
    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::UnknownType {
            type_name: "Missing".to_string(),
        },
    );
}

#[test]
fn distinct_types_must_have_distinct_names() {
    let result = Schema::new(
        SchemaConfig::new()
            .query(ObjectType::new("Query").field(Field::new("a", "Dog")))
            .add_type(ObjectType::new("Dog").field(Field::new("a", "String")))
            .add_type(ObjectType::new("Dog").field(Field::new("b", "String"))),
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Schema must contain uniquely named types but contains multiple types named 'Dog'.",
    );
}

#[test]
fn the_same_type_may_be_listed_twice() {
    let dog = NamedType::from(ObjectType::new("Dog").field(Field::new("a", "String")));
    let schema = Schema::new(
        SchemaConfig::new()
            .query(ObjectType::new("Query").field(Field::new("dog", "Dog")))
            .types([dog.clone(), dog]),
    );
    assert!(schema.is_ok());
}

#[test]
fn field_thunks_run_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let thunk_calls = calls.clone();
    let query = ObjectType::new("Query").fields_thunk(move || {
        thunk_calls.fetch_add(1, Ordering::SeqCst);
        let mut fields = FieldMap::new();
        fields.insert("me".to_string(), Field::new("me", "User"));
        fields
    });
    let user = ObjectType::new("User").fields_thunk(|| {
        let mut fields = FieldMap::new();
        fields.insert("friend".to_string(), Field::new("friend", "User"));
        fields
    });
    let schema = Schema::new(SchemaConfig::new().query(query).add_type(user)).unwrap();

    let query = schema.query_type().unwrap();
    assert!(query.fields().contains_key("me"));
    assert!(query.fields().contains_key("me"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn abstract_type_membership() {
    let schema = build_schema(
        "type Query { node: Node }
         interface Node { id: ID }
         interface Named implements Node { id: ID name: String }
         type User implements Named & Node { id: ID name: String }
         type Post implements Node { id: ID }
         union Result = User | Post",
    )
    .unwrap();
    let get = |name: &str| schema.get_type(name).unwrap();

    let possible = |name: &str| {
        schema
            .possible_types(get(name))
            .into_iter()
            .map(|object| object.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(possible("Node"), ["User", "Post"]);
    assert_eq!(possible("Result"), ["User", "Post"]);
    assert_eq!(possible("Named"), ["User"]);

    assert!(schema.is_sub_type(get("Node"), get("Named")));
    assert!(schema.is_sub_type(get("Result"), get("Post")));
    assert!(!schema.is_sub_type(get("Named"), get("Post")));
    assert!(!schema.is_sub_type(get("User"), get("User")));
}

#[test]
fn field_lookup_includes_meta_fields() {
    let schema = build_schema("type Query { user: User } type User { name: String }").unwrap();
    let query = schema.get_type("Query").unwrap();
    let user = schema.get_type("User").unwrap();

    assert_eq!(schema.field_def(query, "user").map(|field| field.ty.to_string()).as_deref(), Some("User"));
    assert!(schema.field_def(query, "__schema").is_some());
    assert!(schema.field_def(query, "__type").is_some());
    assert!(schema.field_def(user, "__typename").is_some());
    assert!(schema.field_def(user, "__schema").is_none());
    assert!(schema.field_def(user, "missing").is_none());
}

#[test]
fn field_lookup_borrows_from_the_parent_type() {
    let schema = build_schema("type Query { a: Int }").unwrap();
    let standalone: NamedType = ObjectType::new("Other").field(Field::new("b", "String")).into();

    let field = schema.field_def(&standalone, "b").unwrap();
    assert_eq!(field.ty.to_string(), "String");
    assert!(schema.field_def(&standalone, "__typename").is_some());
}

#[test]
fn to_config_rebuilds_an_equivalent_schema() {
    let schema = build_schema("type Query { a: Int } type Mutation { b: Int }").unwrap();
    let rebuilt = Schema::new(schema.to_config()).unwrap();
    assert_eq!(names(&schema), names(&rebuilt));
    assert_eq!(
        rebuilt.mutation_type().map(|mutation| mutation.name.as_str()),
        Some("Mutation"),
    );
}

use crate::schema::Schema;
use crate::utilities::build_schema;
use crate::validation::validate_sdl;
use graphql_engine_parser::parse;

fn sdl_messages(sdl: &str, schema_to_extend: Option<&Schema>) -> Vec<String> {
    let document = parse(sdl).unwrap();
    validate_sdl(&document, schema_to_extend)
        .iter()
        .map(|error| error.message().to_string())
        .collect()
}

#[test]
fn valid_type_system_documents() {
    let sdl = "
        schema { query: Query }
        directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION
        type Query @tag(name: \"a\") @tag(name: \"b\") { a(x: Int = 1): Named @deprecated }
        interface Named { name: String }
        extend type Query { b: [Named!] }
        enum Color { RED GREEN }
        extend enum Color { BLUE }
    ";
    assert_eq!(sdl_messages(sdl, None), Vec::<String>::new());
}

#[test]
fn schema_definitions() {
    assert_eq!(
        sdl_messages(
            "schema { query: Query } schema { query: Query } type Query { a: String }",
            None,
        ),
        vec![
            "Must provide only one schema definition.",
            "There can be only one query type in schema.",
        ],
    );
}

#[test]
fn duplicate_definitions() {
    assert_eq!(
        sdl_messages("type A { a: String } type A { b: String }", None),
        vec!["There can be only one type named 'A'."],
    );
    assert_eq!(
        sdl_messages("enum E { A B A }", None),
        vec!["Enum value 'E.A' can only be defined once."],
    );
    assert_eq!(
        sdl_messages("type T { f: String f: Int }", None),
        vec!["Field 'T.f' can only be defined once."],
    );
    assert_eq!(
        sdl_messages(
            "type T { f(a: Int, a: Int): String } directive @d(x: Int, x: Int) on FIELD",
            None,
        ),
        vec![
            "Argument 'T.f(a:)' can only be defined once.",
            "Argument '@d(x:)' can only be defined once.",
        ],
    );
    assert_eq!(
        sdl_messages("directive @d on FIELD directive @d on QUERY", None),
        vec!["There can be only one directive named '@d'."],
    );
}

#[test]
fn unknown_types_in_type_definitions() {
    assert_eq!(
        sdl_messages("type Query { a: Strin }", None),
        vec!["Unknown type 'Strin'. Did you mean 'String'?"],
    );
}

#[test]
fn type_extensions() {
    assert_eq!(
        sdl_messages("type Query { a: String } extend scalar Query", None),
        vec!["Cannot extend non-scalar type 'Query'."],
    );
    assert_eq!(
        sdl_messages("type Query { a: String } extend type Qeury { b: String }", None),
        vec!["Cannot extend type 'Qeury' because it is not defined. Did you mean 'Query'?"],
    );
}

#[test]
fn directive_arguments_in_type_definitions() {
    assert_eq!(
        sdl_messages(
            "directive @tag(name: String!) on OBJECT type Query @tag @tag(nmae: \"x\") { a: String }",
            None,
        ),
        vec![
            "Directive '@tag' argument 'name' of type 'String!' is required, but it was not \
            provided.",
            "The directive '@tag' can only be used once at this location.",
            "Unknown argument 'nmae' on directive '@tag'. Did you mean 'name'?",
            "Directive '@tag' argument 'name' of type 'String!' is required, but it was not \
            provided.",
        ],
    );
}

#[test]
fn extending_an_existing_schema() {
    let schema = build_schema("type Query { a: String } enum E { X }").unwrap();
    assert_eq!(
        sdl_messages(
            "schema { query: Query }
             type Query { b: String }
             extend type Query { a: Int }
             extend enum E { X }
             directive @skip on FIELD",
            Some(&schema),
        ),
        vec![
            "Type for query already defined in the schema. It cannot be redefined.",
            "Type 'Query' already exists in the schema. It cannot also be defined in this type \
            definition.",
            "Field 'Query.a' already exists in the schema. It cannot also be defined in this \
            type extension.",
            "Enum value 'E.X' already exists in the schema. It cannot also be defined in this \
            type extension.",
            "Directive '@skip' already exists in the schema. It cannot be redefined.",
        ],
    );
}

use crate::schema::Schema;
use crate::types::TypeRef;
use crate::utilities::build_schema;
use crate::utilities::do_types_overlap;
use crate::utilities::is_equal_type;
use crate::utilities::is_type_sub_type_of;
use crate::utilities::type_from_ast;
use graphql_engine_parser::parse_type;

fn schema() -> Schema {
    build_schema(
        "interface Node { id: ID! }
         type User implements Node { id: ID! }
         type Post implements Node { id: ID! }
         type Tag { name: String }
         union Result = User | Tag
         type Query { node: Node result: Result post: Post }",
    )
    .unwrap()
}

fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

#[test]
fn equality_compares_wrappers() {
    assert!(is_equal_type(&named("Int").list(), &named("Int").list()));
    assert!(!is_equal_type(&named("Int").list(), &named("Int").non_null().list()));
    assert!(!is_equal_type(&named("Int"), &named("Float")));
}

#[test]
fn sub_types() {
    let schema = schema();
    let sub = |a: TypeRef, b: TypeRef| is_type_sub_type_of(&schema, &a, &b);

    assert!(sub(named("Int"), named("Int")));
    assert!(sub(named("Int").non_null(), named("Int")));
    assert!(!sub(named("Int"), named("Int").non_null()));
    assert!(sub(named("User"), named("Node")));
    assert!(sub(named("User"), named("Result")));
    assert!(!sub(named("Node"), named("User")));
    assert!(!sub(named("Post"), named("Result")));
    assert!(sub(named("User").non_null().list().non_null(), named("Node").list()));
    assert!(!sub(named("User").list(), named("Node")));
    assert!(!sub(named("User"), named("Node").list()));
}

#[test]
fn overlapping_types() {
    let schema = schema();
    let ty = |name: &str| schema.get_type(name).unwrap();

    assert!(do_types_overlap(&schema, ty("Node"), ty("Result")));
    assert!(do_types_overlap(&schema, ty("Node"), ty("Post")));
    assert!(do_types_overlap(&schema, ty("Tag"), ty("Result")));
    assert!(!do_types_overlap(&schema, ty("User"), ty("Post")));
    assert!(!do_types_overlap(&schema, ty("Tag"), ty("Node")));
}

#[test]
fn types_from_ast() {
    let schema = schema();
    assert_eq!(
        type_from_ast(&schema, &parse_type("[User!]").unwrap()),
        Some(named("User").non_null().list()),
    );
    assert_eq!(type_from_ast(&schema, &parse_type("Missing!").unwrap()), None);
}

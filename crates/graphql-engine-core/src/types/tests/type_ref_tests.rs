use crate::types::TypeKind;
use crate::types::TypeRef;
use graphql_engine_parser::parse_type;

#[test]
fn wrappers_display_in_sdl_syntax() {
    let ty = TypeRef::named("String").non_null().list().non_null();
    assert_eq!(ty.to_string(), "[String!]!");
    assert_eq!(ty.named_type(), "String");
    assert_eq!(ty.nullable().to_string(), "[String!]");
    assert_eq!(ty.of_type().and_then(TypeRef::of_type), Some(&TypeRef::named("String").non_null()));
}

#[test]
fn non_null_does_not_double_wrap() {
    assert_eq!(TypeRef::named("Int").non_null().non_null(), TypeRef::named("Int").non_null());
}

#[test]
fn converts_from_and_to_ast_types() {
    let ast_type = parse_type("[[ID]!]").unwrap();
    let ty = TypeRef::from(&ast_type);
    assert_eq!(ty, TypeRef::named("ID").list().non_null().list());
    assert_eq!(TypeRef::from(&ty.to_ast()), ty);
}

#[test]
fn type_kinds_round_trip_through_names() {
    for kind in TypeKind::ALL {
        assert_eq!(TypeKind::from_name(kind.as_str()), Some(kind));
    }
    assert_eq!(TypeKind::from_name("NOT_A_KIND"), None);
}

//! Tests for [`crate::Parser`] and the `parse*` entry points.

use crate::ast::*;
use crate::parse;
use crate::parse_const_value;
use crate::parse_type;
use crate::parse_value;
use crate::parse_with_options;
use crate::ParseOptions;
use crate::SourceLocation;

fn parse_error(body: &str) -> String {
    parse(body).unwrap_err().message().to_string()
}

fn only_operation(doc: &Document) -> &OperationDefinition {
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 1);
    ops[0]
}

fn field(selection: &Selection) -> &Field {
    match selection {
        Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

// =============================================================================
// Executable documents
// =============================================================================

#[test]
fn parses_query_shorthand() {
    let doc = parse("{ hero { name } }").unwrap();
    let op = only_operation(&doc);
    assert_eq!(op.operation, OperationType::Query);
    assert!(op.name.is_none());
    let hero = field(&op.selection_set.selections[0]);
    assert_eq!(hero.name.value, "hero");
    let name = field(&hero.selection_set.as_ref().unwrap().selections[0]);
    assert_eq!(name.response_key(), "name");
    assert!(name.selection_set.is_none());
}

#[test]
fn parses_named_operation_with_variables_and_directives() {
    let doc = parse(
        r#"
        mutation Like($id: ID!, $times: [Int!] = [1, 2] @deprecated) @op(x: 1) {
          like: likeStory(storyId: $id, times: $times) @skip(if: false) {
            story { likeCount }
          }
        }
        "#,
    )
    .unwrap();
    let op = only_operation(&doc);
    assert_eq!(op.operation, OperationType::Mutation);
    assert_eq!(op.name.as_ref().unwrap().value, "Like");
    assert_eq!(op.variable_definitions.len(), 2);

    let times = &op.variable_definitions[1];
    assert_eq!(times.variable.name.value, "times");
    assert!(matches!(&times.ty, Type::List(list) if matches!(*list.ty, Type::NonNull(_))));
    assert!(matches!(&times.default_value, Some(Value::List(list)) if list.values.len() == 2));
    assert_eq!(times.directives[0].name.value, "deprecated");
    assert_eq!(op.directives[0].name.value, "op");

    let like = field(&op.selection_set.selections[0]);
    assert_eq!(like.alias.as_ref().unwrap().value, "like");
    assert_eq!(like.name.value, "likeStory");
    assert_eq!(like.response_key(), "like");
    assert_eq!(like.arguments.len(), 2);
    assert!(matches!(&like.arguments[0].value, Value::Variable(v) if v.name.value == "id"));
    assert_eq!(like.directives[0].name.value, "skip");
}

#[test]
fn parses_fragments() {
    let doc = parse(
        r#"
        query { ...Frag ... on User { id } ... @include(if: true) { name } }
        fragment Frag on Query { me }
        "#,
    )
    .unwrap();
    let op = only_operation(&doc);
    let selections = &op.selection_set.selections;
    assert!(matches!(&selections[0], Selection::FragmentSpread(s) if s.name.value == "Frag"));
    assert!(matches!(
        &selections[1],
        Selection::InlineFragment(f) if f.type_condition.as_ref().unwrap().name.value == "User"
    ));
    assert!(matches!(
        &selections[2],
        Selection::InlineFragment(f) if f.type_condition.is_none() && f.directives.len() == 1
    ));

    let frags: Vec<_> = doc.fragments().collect();
    assert_eq!(frags[0].name.value, "Frag");
    assert_eq!(frags[0].type_condition.name.value, "Query");
    assert!(frags[0].variable_definitions.is_none());
}

#[test]
fn parses_every_value_kind() {
    let value = parse_value(r#"[1, -2.5e3, "s", """b""", true, null, ENUM, $v, {a: {b: []}}]"#)
        .unwrap();
    let Value::List(list) = value else {
        panic!("expected a list");
    };
    assert!(matches!(&list.values[0], Value::Int(i) if i.value == "1"));
    assert!(matches!(&list.values[1], Value::Float(f) if f.value == "-2.5e3"));
    assert!(matches!(&list.values[2], Value::String(s) if s.value == "s" && !s.block));
    assert!(matches!(&list.values[3], Value::String(s) if s.value == "b" && s.block));
    assert!(matches!(&list.values[4], Value::Boolean(b) if b.value));
    assert!(matches!(&list.values[5], Value::Null(_)));
    assert!(matches!(&list.values[6], Value::Enum(e) if e.value == "ENUM"));
    assert!(matches!(&list.values[7], Value::Variable(v) if v.name.value == "v"));
    assert!(matches!(&list.values[8], Value::Object(o) if o.fields[0].name.value == "a"));
    assert!(!list.values[7].is_const());
}

#[test]
fn parses_type_references() {
    let ty = parse_type("[String!]!").unwrap();
    let Type::NonNull(outer) = ty else {
        panic!("expected non-null");
    };
    let Type::List(list) = *outer.ty else {
        panic!("expected list");
    };
    assert!(matches!(*list.ty, Type::NonNull(ref inner) if inner.ty.named_type().name.value == "String"));
}

// =============================================================================
// Type-system documents
// =============================================================================

#[test]
fn parses_type_system_definitions() {
    let doc = parse(
        r#"
        """The schema"""
        schema @dir { query: Query mutation: Mutation }

        "A scalar"
        scalar Date @specifiedBy(url: "https://example.com")

        type Query implements & Node & Entity @key {
          "The id"
          id(arg: Int = 1 @deprecated): ID!
        }

        interface Node implements Entity { id: ID! }
        union Result = | Photo | Person
        enum Color { RED "green" GREEN @deprecated }
        input Point { x: Float = 0.0, y: Float }
        directive @key(fields: String) repeatable on OBJECT | INTERFACE
        "#,
    )
    .unwrap();
    assert_eq!(doc.definitions.len(), 8);
    assert!(doc.definitions.iter().all(Definition::is_type_system));

    let Definition::Schema(schema) = &doc.definitions[0] else {
        panic!("expected schema definition");
    };
    assert_eq!(schema.description.as_ref().unwrap().value, "The schema");
    assert_eq!(schema.operation_types[1].operation, OperationType::Mutation);
    assert_eq!(schema.operation_types[1].ty.name.value, "Mutation");

    let Definition::Type(TypeDefinition::Object(query)) = &doc.definitions[2] else {
        panic!("expected object type");
    };
    assert_eq!(
        query.interfaces.iter().map(|i| i.name.value.as_str()).collect::<Vec<_>>(),
        vec!["Node", "Entity"],
    );
    let id = &query.fields[0];
    assert_eq!(id.description.as_ref().unwrap().value, "The id");
    assert_eq!(id.arguments[0].directives[0].name.value, "deprecated");

    let Definition::Type(TypeDefinition::Union(union)) = &doc.definitions[4] else {
        panic!("expected union");
    };
    assert_eq!(union.types.len(), 2);

    let Definition::Type(TypeDefinition::Enum(color)) = &doc.definitions[5] else {
        panic!("expected enum");
    };
    assert_eq!(color.values[1].description.as_ref().unwrap().value, "green");

    let Definition::Directive(key) = &doc.definitions[7] else {
        panic!("expected directive definition");
    };
    assert!(key.repeatable);
    assert_eq!(
        key.locations.iter().map(|l| l.value.as_str()).collect::<Vec<_>>(),
        vec!["OBJECT", "INTERFACE"],
    );
}

#[test]
fn parses_type_system_extensions() {
    let doc = parse(
        r#"
        extend schema @dir
        extend scalar Date @dir
        extend type Query implements Node
        extend interface Node { name: String }
        extend union Result = Thing
        extend enum Color { BLUE }
        extend input Point @dir
        "#,
    )
    .unwrap();
    assert_eq!(doc.definitions.len(), 7);
    assert!(doc.definitions.iter().all(Definition::is_type_system_extension));
    let Definition::TypeExtension(ext) = &doc.definitions[2] else {
        panic!("expected type extension");
    };
    assert_eq!(ext.name().value, "Query");
}

#[test]
fn empty_extensions_are_rejected() {
    assert_eq!(parse_error("extend type Foo"), "Syntax Error: Unexpected <EOF>.");
    assert_eq!(parse_error("extend schema"), "Syntax Error: Unexpected <EOF>.");
    assert_eq!(parse_error("extend scalar S"), "Syntax Error: Unexpected <EOF>.");
    assert_eq!(parse_error("extend foo Bar"), "Syntax Error: Unexpected Name 'foo'.");
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn nodes_carry_locations() {
    let doc = parse("{ a(x: 1) }").unwrap();
    let a = field(&only_operation(&doc).selection_set.selections[0]);
    let loc = a.loc.as_ref().unwrap();
    assert_eq!((loc.start, loc.end), (2, 9));
    assert_eq!(loc.source_location(), SourceLocation::new(1, 3));
    assert_eq!(doc.loc.as_ref().unwrap().end, 11);
}

#[test]
fn no_location_option_omits_locations() {
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    let doc = parse_with_options("{ a }", options).unwrap();
    assert!(doc.loc.is_none());
    assert!(only_operation(&doc).selection_set.loc.is_none());
}

// =============================================================================
// Syntax errors
// =============================================================================

#[test]
fn reports_expected_token() {
    let err = parse("{").unwrap_err();
    assert_eq!(err.message(), "Syntax Error: Expected Name, found <EOF>.");
    assert_eq!(err.locations(), &[SourceLocation::new(1, 2)]);

    assert_eq!(parse_error("query"), "Syntax Error: Expected '{', found <EOF>.");
    assert_eq!(parse_error("{ a(x) }"), "Syntax Error: Expected ':', found ')'.");
    assert_eq!(parse_error("{ ...MissingOn }\nfragment MissingOn Type"),
        "Syntax Error: Expected 'on', found Name 'Type'.");
}

#[test]
fn reports_unexpected_token() {
    assert_eq!(parse_error(""), "Syntax Error: Unexpected <EOF>.");
    assert_eq!(
        parse_error("notAnOperation Foo { field }"),
        "Syntax Error: Unexpected Name 'notAnOperation'.",
    );
    assert_eq!(parse_error("..."), "Syntax Error: Unexpected '...'.");
    assert_eq!(parse_error("{ a(x: ) }"), "Syntax Error: Unexpected ')'.");
    assert_eq!(parse_error("fragment on on T { a }"), "Syntax Error: Unexpected Name 'on'.");
    assert_eq!(parse_error("directive @d on FOO"), "Syntax Error: Unexpected Name 'FOO'.");
}

#[test]
fn descriptions_only_on_type_system_definitions() {
    assert_eq!(
        parse_error(r#""Description" query Q { a }"#),
        "Syntax Error: Unexpected description, descriptions are supported only on type definitions.",
    );
}

#[test]
fn variables_not_allowed_in_constant_values() {
    assert_eq!(
        parse_error("query Q($a: Int = $b) { a }"),
        "Syntax Error: Unexpected variable '$b' in constant value.",
    );
    assert_eq!(
        parse_const_value("$v").unwrap_err().message(),
        "Syntax Error: Unexpected variable '$v' in constant value.",
    );
    assert_eq!(
        parse_error("type T { f(a: Int = [$x]): Int }"),
        "Syntax Error: Unexpected variable '$x' in constant value.",
    );
}

/// See
/// [Enum Value](https://spec.graphql.org/October2021/#EnumValue)
/// in the GraphQL spec.
#[test]
fn enum_values_cannot_be_reserved_words() {
    assert_eq!(
        parse_error("enum E { true }"),
        "Syntax Error: Name 'true' is reserved and cannot be used for an enum value.",
    );
    assert_eq!(
        parse_error("enum E { A null }"),
        "Syntax Error: Name 'null' is reserved and cannot be used for an enum value.",
    );
}

#[test]
fn lexer_errors_surface_from_parse() {
    let err = parse("{ a(x: 00) }").unwrap_err();
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid number, unexpected digit after 0: '0'.",
    );
    assert_eq!(err.locations(), &[SourceLocation::new(1, 9)]);
}

// =============================================================================
// Limits and legacy syntax
// =============================================================================

#[test]
fn max_tokens_aborts_parsing() {
    let options = ParseOptions {
        max_tokens: Some(3),
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options("{ a b c }", options.clone()).unwrap_err().message(),
        "Syntax Error: Document contains more than 3 tokens. Parsing aborted.",
    );
    let options = ParseOptions {
        max_tokens: Some(4),
        ..ParseOptions::default()
    };
    assert!(parse_with_options("{ a }", options).is_ok());
}

#[test]
fn deeply_nested_selections_are_rejected() {
    let body = format!("{}{}", "{ a ".repeat(100), "}".repeat(100));
    assert_eq!(
        parse_error(&body),
        "Syntax Error: Document exceeds the maximum nesting depth of 64.",
    );

    let shallow = format!("{}{}", "{ a ".repeat(10), "}".repeat(10));
    assert!(parse(shallow.as_str()).is_ok());
}

#[test]
fn deeply_nested_values_are_rejected() {
    let body = format!("{}{}", "[".repeat(100), "]".repeat(100));
    assert_eq!(
        parse_value(body.as_str()).unwrap_err().message(),
        "Syntax Error: Document exceeds the maximum nesting depth of 64.",
    );
}

#[test]
fn fragment_variables_require_legacy_option() {
    let body = "fragment F($a: Int = 1) on T { a }";
    assert_eq!(parse_error(body), "Syntax Error: Expected 'on', found '('.");

    let options = ParseOptions {
        allow_legacy_fragment_variables: true,
        ..ParseOptions::default()
    };
    let doc = parse_with_options(body, options).unwrap();
    let frag = doc.fragments().next().unwrap();
    let var_defs = frag.variable_definitions.as_ref().unwrap();
    assert_eq!(var_defs[0].variable.name.value, "a");
}

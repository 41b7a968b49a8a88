//! Tests for [`crate::print_ast`] and [`crate::print_string`].

use crate::ast::*;
use crate::parse;
use crate::parse_value;
use crate::parse_with_options;
use crate::print_ast;
use crate::print_string;
use crate::ParseOptions;
use proptest::prelude::*;

fn reprint(body: &str) -> String {
    print_ast(&parse(body).unwrap())
}

fn parse_without_locations(body: &str) -> Document {
    let options = ParseOptions {
        no_location: true,
        allow_legacy_fragment_variables: true,
        ..ParseOptions::default()
    };
    parse_with_options(body, options).unwrap()
}

const KITCHEN_SINK_QUERY: &str = r#"query Q($id: ID! = "1" @dir, $list: [Int] = [1, 2]) @op {
  alias: user(id: $id, filter: {name: "x", tags: [A, B]}) {
    ... on User @skip(if: false) {
      name
    }
    ...Frag
    ... @include(if: true) {
      id
    }
  }
}

subscription {
  events
}

fragment Frag on User @dir {
  id
}"#;

const KITCHEN_SINK_SDL: &str = r#""""Desc"""
schema {
  query: Query
}

scalar Date @specifiedBy(url: "https://example.com")

type Foo implements Bar & Baz @d {
  "field desc"
  f(a: Int = 1, b: [String!]): String! @deprecated
}

interface Bar implements Baz {
  f: String!
}

union U = A | B

enum E {
  A
  B @deprecated(reason: "no")
}

input I {
  x: Int = 1
  y: [String!]!
}

directive @d(a: Int) repeatable on FIELD | QUERY

extend type Foo {
  g: Int
}

extend union U @d

extend schema @d"#;

// =============================================================================
// Canonical layout
// =============================================================================

#[test]
fn prints_query_shorthand() {
    assert_eq!(reprint("{ a }"), "{\n  a\n}");
    assert_eq!(reprint("query { a }"), "{\n  a\n}");
    assert_eq!(reprint("query Q { a }"), "query Q {\n  a\n}");
    assert_eq!(reprint("query ($v: Int) { a }"), "query ($v: Int) {\n  a\n}");
}

#[test]
fn kitchen_sink_query_is_canonical() {
    assert_eq!(reprint(KITCHEN_SINK_QUERY), KITCHEN_SINK_QUERY);
}

#[test]
fn kitchen_sink_sdl_is_canonical() {
    assert_eq!(reprint(KITCHEN_SINK_SDL), KITCHEN_SINK_SDL);
}

#[test]
fn reformats_compact_input() {
    assert_eq!(
        reprint("query Q{a:b(c:1,d:[1,2]){...F}}fragment F on T{x}"),
        "query Q {\n  a: b(c: 1, d: [1, 2]) {\n    ...F\n  }\n}\n\nfragment F on T {\n  x\n}",
    );
}

#[test]
fn long_argument_lists_break_across_lines() {
    let printed = reprint(
        "{ f(aaaaaaaaaaaaaaaaaaaa: 1, bbbbbbbbbbbbbbbbbbbbbbbbb: 2, ccccccccccccccccccccccccc: 3, d: 4) }",
    );
    assert_eq!(
        printed,
        "{\n  f(\n    aaaaaaaaaaaaaaaaaaaa: 1\n    bbbbbbbbbbbbbbbbbbbbbbbbb: 2\n    ccccccccccccccccccccccccc: 3\n    d: 4\n  )\n}",
    );
}

#[test]
fn argument_definitions_with_block_descriptions_break_across_lines() {
    let sdl = "type Q {\n  f(\n    \"\"\"\n    multi\n    line\n    \"\"\"\n    a: Int\n  ): Int\n}";
    assert_eq!(reprint(sdl), sdl);
}

#[test]
fn prints_legacy_fragment_variables() {
    let doc = parse_without_locations("fragment F($a: Int = 1) on T { a }");
    assert_eq!(print_ast(&doc), "fragment F($a: Int = 1) on T {\n  a\n}");
}

#[test]
fn prints_values_compactly() {
    let value = parse_value(r#"{a: 1, b: [true, null], c: "\"q\"", d: ENUM, e: $var}"#).unwrap();
    assert_eq!(
        print_ast(&value),
        r#"{a: 1, b: [true, null], c: "\"q\"", d: ENUM, e: $var}"#,
    );
}

#[test]
fn prints_block_string_values() {
    assert_eq!(reprint("{ f(a: \"\"\"text\"\"\") }"), "{\n  f(a: \"\"\"text\"\"\")\n}");
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn printing_then_parsing_preserves_the_document() {
    for body in [KITCHEN_SINK_QUERY, KITCHEN_SINK_SDL] {
        let original = parse_without_locations(body);
        let reparsed = parse_without_locations(&print_ast(&original));
        assert_eq!(original, reparsed);
    }
}

fn value_literal() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "-?[1-9][0-9]{0,3}",
        "-?[0-9]\\.[0-9]{1,2}",
        "\"[a-z ]{0,4}\"",
        "[A-Z][A-Z_]{0,3}",
        "\\$[a-z]{1,3}",
        prop::sample::select(vec!["true", "false", "null"]).prop_map(str::to_string),
    ];
    leaf.prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..3).prop_map(|fields| {
                let fields = fields
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect::<Vec<_>>();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

/// A field with an optional alias, arguments and directive, but no
/// selection set.
fn field_head() -> impl Strategy<Value = String> {
    (
        "([a-z]{1,3}: )?",
        "[a-z][a-z0-9]{0,4}",
        prop::collection::vec(("[a-z]{1,3}", value_literal()), 0..3),
        prop::option::of(value_literal()),
    )
        .prop_map(|(alias, name, args, directive_arg)| {
            let mut head = format!("{alias}{name}");
            if !args.is_empty() {
                let args = args
                    .iter()
                    .map(|(arg, value)| format!("{arg}: {value}"))
                    .collect::<Vec<_>>();
                head.push_str(&format!("({})", args.join(", ")));
            }
            if let Some(value) = directive_arg {
                head.push_str(&format!(" @skip(if: {value})"));
            }
            head
        })
}

fn selection() -> impl Strategy<Value = String> {
    field_head().prop_recursive(3, 24, 4, |inner| {
        let selections = prop::collection::vec(inner, 1..4).prop_map(|items| items.join(" "));
        prop_oneof![
            (field_head(), selections.clone())
                .prop_map(|(head, selections)| format!("{head} {{ {selections} }}")),
            ("[A-Z][a-z]{0,4}", selections.clone())
                .prop_map(|(on, selections)| format!("... on {on} {{ {selections} }}")),
            selections.prop_map(|selections| format!("... {{ {selections} }}")),
            "[A-Z][a-z]{0,4}".prop_map(|name| format!("...{name}")),
        ]
    })
}

fn executable_document() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "",
            "query Q ",
            "mutation M($a: [Int!] = [1]) ",
            "subscription ",
        ]),
        prop::collection::vec(selection(), 1..4),
    )
        .prop_map(|(head, selections)| format!("{head}{{ {} }}", selections.join(" ")))
}

proptest! {
    #[test]
    fn printing_then_parsing_preserves_generated_documents(body in executable_document()) {
        let original = parse_without_locations(&body);
        let printed = print_ast(&original);
        prop_assert_eq!(&original, &parse_without_locations(&printed));
        prop_assert_eq!(&printed, &print_ast(&parse_without_locations(&printed)));
    }
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn print_string_escapes_control_characters() {
    assert_eq!(print_string("plain"), "\"plain\"");
    assert_eq!(
        print_string("a\"b\\c\n\t\u{1}\u{7f}\u{9f}"),
        "\"a\\\"b\\\\c\\n\\t\\u0001\\u007F\\u009F\"",
    );
    assert_eq!(print_string("ü😀"), "\"ü😀\"");
}

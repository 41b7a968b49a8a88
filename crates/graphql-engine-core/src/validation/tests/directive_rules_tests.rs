use super::expect_valid;
use super::messages_for;
use crate::validation::rules;

#[test]
fn known_directives() {
    expect_valid(
        rules::known_directives,
        "query Q @onQuery { dog @include(if: true) { name @onField } ...F } fragment F on Query { cat { name } }",
    );
    assert_eq!(
        messages_for(rules::known_directives, "{ dog @x { name } }"),
        vec!["Unknown directive '@x'."],
    );
    assert_eq!(
        messages_for(rules::known_directives, "query Q @onField { dog @onQuery { name } }"),
        vec![
            "Directive '@onField' may not be used on QUERY.",
            "Directive '@onQuery' may not be used on FIELD.",
        ],
    );
}

#[test]
fn directives_defined_in_the_document_are_known() {
    let document = graphql_engine_parser::parse(
        "directive @custom on OBJECT type Query @custom { a: String @custom }",
    )
    .unwrap();
    let messages = crate::validation::validate_sdl(&document, None)
        .iter()
        .map(|error| error.message().to_string())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["Directive '@custom' may not be used on FIELD_DEFINITION."]);
}

#[test]
fn unique_directives_per_location() {
    expect_valid(
        rules::unique_directives_per_location,
        "{ dog @onField { name @onField } cat @repeatableOnField @repeatableOnField { name } }",
    );
    assert_eq!(
        messages_for(
            rules::unique_directives_per_location,
            "{ dog @onField @onField { name @skip(if: true) @skip(if: false) } }",
        ),
        vec![
            "The directive '@onField' can only be used once at this location.",
            "The directive '@skip' can only be used once at this location.",
        ],
    );
}

use super::expect_valid;
use super::messages_for;
use crate::validation::rules;

#[test]
fn executable_definitions() {
    expect_valid(rules::executable_definitions, "query Foo { dog { name } }");
    assert_eq!(
        messages_for(
            rules::executable_definitions,
            "query Foo { dog { name } } type Cow { name: String } extend type Dog { color: String }",
        ),
        vec![
            "The 'Cow' definition is not executable.",
            "The 'Dog' definition is not executable.",
        ],
    );
    assert_eq!(
        messages_for(rules::executable_definitions, "schema { query: Query }"),
        vec!["The schema definition is not executable."],
    );
}

#[test]
fn unique_operation_names() {
    expect_valid(
        rules::unique_operation_names,
        "query Foo { dog { name } } mutation Bar { dog { name } } { cat { name } }",
    );
    assert_eq!(
        messages_for(
            rules::unique_operation_names,
            "query Foo { dog { name } } subscription Foo { newDog { name } }",
        ),
        vec!["There can be only one operation named 'Foo'."],
    );
}

#[test]
fn lone_anonymous_operation() {
    expect_valid(rules::lone_anonymous_operation, "{ dog { name } } fragment F on Dog { name }");
    assert_eq!(
        messages_for(rules::lone_anonymous_operation, "{ dog { name } } query Q { cat { name } }"),
        vec!["This anonymous operation must be the only defined operation."],
    );
}

#[test]
fn single_field_subscriptions() {
    expect_valid(rules::single_field_subscriptions, "subscription S { newDog { name } }");
    assert_eq!(
        messages_for(
            rules::single_field_subscriptions,
            "subscription S { newDog { name } newCat { name } }",
        ),
        vec!["Subscription 'S' must select only one top level field."],
    );
    assert_eq!(
        messages_for(
            rules::single_field_subscriptions,
            "subscription { ...F } fragment F on Subscription { newDog { name } newCat { name } }",
        ),
        vec!["Anonymous Subscription must select only one top level field."],
    );
    assert_eq!(
        messages_for(rules::single_field_subscriptions, "subscription S { __typename }"),
        vec!["Subscription 'S' must not select an introspection top level field."],
    );
}

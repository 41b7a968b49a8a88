use super::expect_valid;
use super::messages_for;
use crate::validation::rules;

#[test]
fn fields_on_correct_type() {
    expect_valid(
        rules::fields_on_correct_type,
        "{ dog { __typename name barkVolume } pet { name ... on Dog { barks } } }",
    );
    assert_eq!(
        messages_for(rules::fields_on_correct_type, "{ dog { meowVolume } }"),
        vec!["Cannot query field 'meowVolume' on type 'Dog'. Did you mean 'barkVolume'?"],
    );
    assert_eq!(
        messages_for(rules::fields_on_correct_type, "{ pet { meows } }"),
        vec!["Cannot query field 'meows' on type 'Pet'. Did you mean to use an inline fragment on 'Cat'?"],
    );
}

#[test]
fn fields_on_unions_only_allow_typename() {
    assert_eq!(
        messages_for(rules::fields_on_correct_type, "{ catOrDog { __typename name } }"),
        vec![
            "Cannot query field 'name' on type 'CatOrDog'. Did you mean to use an inline \
            fragment on 'Being', 'Pet', 'Cat', or 'Dog'?",
        ],
    );
}

#[test]
fn scalar_leafs() {
    expect_valid(rules::scalar_leafs, "{ dog { barks } human { name } }");
    assert_eq!(
        messages_for(rules::scalar_leafs, "{ human }"),
        vec!["Field 'human' of type 'Human' must have a selection of subfields. Did you mean 'human { ... }'?"],
    );
    assert_eq!(
        messages_for(rules::scalar_leafs, "{ dog { barks { sinceWhen } } }"),
        vec!["Field 'barks' must not have a selection since type 'Boolean' has no subfields."],
    );
}

#[test]
fn known_type_names() {
    expect_valid(
        rules::known_type_names,
        "query ($id: ID, $color: FurColor) { human(id: $id) { ... on Human { name } } }",
    );
    assert_eq!(
        messages_for(
            rules::known_type_names,
            "query ($var: JumbledUpLetters) { dog { name } } fragment F on Badger { name }",
        ),
        vec![
            "Unknown type 'JumbledUpLetters'.",
            "Unknown type 'Badger'.",
        ],
    );
}

#[test]
fn fragments_on_composite_types() {
    expect_valid(
        rules::fragments_on_composite_types,
        "fragment F on Pet { ... on Dog { barks } ... { name } }",
    );
    assert_eq!(
        messages_for(
            rules::fragments_on_composite_types,
            "fragment scalarFragment on Boolean { bad } fragment F on Cat { ... on FurColor { x } }",
        ),
        vec![
            "Fragment 'scalarFragment' cannot condition on non composite type 'Boolean'.",
            "Fragment cannot condition on non composite type 'FurColor'.",
        ],
    );
}

#[test]
fn variables_are_input_types() {
    expect_valid(
        rules::variables_are_input_types,
        "query ($a: String, $b: [Boolean!]!, $c: ComplexInput) { dog { name } }",
    );
    assert_eq!(
        messages_for(
            rules::variables_are_input_types,
            "query ($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) { dog { name } }",
        ),
        vec![
            "Variable '$a' cannot be non-input type 'Dog'.",
            "Variable '$b' cannot be non-input type '[[CatOrDog!]]!'.",
            "Variable '$c' cannot be non-input type 'Pet'.",
        ],
    );
}

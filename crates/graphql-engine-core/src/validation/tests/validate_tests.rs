use crate::utilities::build_schema;
use crate::validation::validate;
use crate::validation::ValidationOptions;
use graphql_engine_parser::parse;
use graphql_engine_parser::GraphQLError;
use rayon::prelude::*;

fn messages(errors: &[GraphQLError]) -> Vec<&str> {
    errors.iter().map(GraphQLError::message).collect()
}

#[test]
fn valid_documents_have_no_errors() {
    let errors = validate(
        super::test_schema(),
        &parse(
            "query Q($id: ID, $withName: Boolean = true) {
                human(id: $id) { ...HumanFields pets { name ... on Dog { barks } } }
                catOrDog { __typename ... on Cat { furColor } }
             }
             fragment HumanFields on Human { name @include(if: $withName) relatives { name } }",
        )
        .unwrap(),
        ValidationOptions::default(),
    );
    assert_eq!(messages(&errors), Vec::<&str>::new());
}

#[test]
fn misspelled_field_suggests_the_closest_name() {
    let schema = build_schema("type Query { name: String }").unwrap();
    let errors = validate(&schema, &parse("{ nmae }").unwrap(), ValidationOptions::default());
    assert_eq!(
        messages(&errors),
        vec!["Cannot query field 'nmae' on type 'Query'. Did you mean 'name'?"],
    );
    let locations = errors[0].locations();
    assert_eq!((locations[0].line, locations[0].column), (1, 3));
}

#[test]
fn fragment_cycles_are_reported_by_the_full_rule_set() {
    let schema = build_schema("type Query { t: T } type T { x: Int }").unwrap();
    let document = parse("fragment A on T { ...B } fragment B on T { ...A }").unwrap();
    let errors = validate(&schema, &document, ValidationOptions::default());
    assert!(
        errors
            .iter()
            .any(|error| error.message() == "Cannot spread fragment 'A' within itself via 'B'."),
        "{errors:?}",
    );
}

#[test]
fn subscriptions_select_a_single_root_field() {
    let schema = build_schema("type Query { x: Int } type Subscription { a: String b: String }").unwrap();
    let errors = validate(
        &schema,
        &parse("subscription S { a b }").unwrap(),
        ValidationOptions::default(),
    );
    assert_eq!(
        messages(&errors),
        vec!["Subscription 'S' must select only one top level field."],
    );
}

#[test]
fn error_limit_aborts_validation() {
    let schema = build_schema("type Query { name: String }").unwrap();
    let document = parse("{ a b c d e }").unwrap();

    let errors = validate(
        &schema,
        &document,
        ValidationOptions {
            max_errors: Some(2),
            ..ValidationOptions::default()
        },
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Cannot query field 'a' on type 'Query'.",
            "Cannot query field 'b' on type 'Query'.",
            "Too many validation errors, error limit reached. Validation aborted.",
        ],
    );

    let unlimited = validate(
        &schema,
        &document,
        ValidationOptions {
            max_errors: None,
            ..ValidationOptions::default()
        },
    );
    assert_eq!(unlimited.len(), 5);
}

#[test]
fn errors_are_reported_in_a_stable_order() {
    let document = parse(
        "query Q($unused: Int) { dog { meowVolume ...Missing } cat @unknown { name } }
         fragment Unused on Dog { name }",
    )
    .unwrap();
    let first = validate(super::test_schema(), &document, ValidationOptions::default());
    let second = validate(super::test_schema(), &document, ValidationOptions::default());
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn one_schema_validates_many_documents_in_parallel() {
    let schema = super::test_schema();
    let documents = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                format!("query Q{i} {{ dog {{ name }} }}")
            } else {
                format!("query Q{i} {{ dog {{ nmae }} }}")
            }
        })
        .collect::<Vec<_>>();

    let error_counts = documents
        .par_iter()
        .map(|source| {
            let document = parse(source.as_str()).unwrap();
            validate(schema, &document, ValidationOptions::default()).len()
        })
        .collect::<Vec<_>>();

    for (i, count) in error_counts.into_iter().enumerate() {
        assert_eq!(count, i % 2, "document {i}");
    }
}

#[test]
fn invalid_schemas_report_their_own_errors() {
    let schema = build_schema("type Query { a(x: Query): String }").unwrap();
    let errors = validate(&schema, &parse("{ a }").unwrap(), ValidationOptions::default());
    assert_eq!(
        messages(&errors),
        vec!["The type of Query.a(x:) must be Input Type but got: Query."],
    );
}

use super::variables;
use crate::execute_sync;
use crate::execution::get_argument_values;
use crate::execution::get_variable_values;
use crate::execution::ExecutionArgs;
use crate::execution::FieldValue;
use crate::utilities::build_schema;
use crate::MaybeAsync;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::parse;
use serde_json::json;
use serde_json::Map;

const SCHEMA: &str = "
    input Filter { size: Int tags: [String!] }
    type Query {
        f(x: Int!): Int
        g(x: Int = 3): Int
        search(filter: Filter): String
    }
";

/// Runs `query` with every field resolving to its `x` (or `filter`)
/// argument.
fn run(query: &str, vars: Value) -> Value {
    let schema = build_schema(SCHEMA).unwrap();
    let document = parse(query).unwrap();
    execute_sync(
        ExecutionArgs::new(&schema, &document)
            .variable_values(variables(vars))
            .field_resolver(|_source, _info, args| {
                let value = args
                    .get("x")
                    .or_else(|| args.get("filter"))
                    .cloned()
                    .map(|value| match value {
                        Value::Object(_) => Value::String(value.to_string()),
                        other => other,
                    });
                MaybeAsync::Ready(Ok(FieldValue::from(value)))
            }),
    )
    .unwrap()
    .to_value()
}

#[test]
fn invalid_variable_value() {
    let response = run("query Q($x: Int!) { f(x: $x) }", json!({"x": "abc"}));
    assert_eq!(
        response,
        json!({
            "data": null,
            "errors": [{
                "message": "Variable '$x' got invalid value \"abc\"; Int cannot represent \
                    non-integer value: \"abc\"",
                "locations": [{"line": 1, "column": 9}],
            }],
        }),
    );
}

#[test]
fn variables_are_coerced_and_passed_through() {
    let response = run("query ($x: Int!) { f(x: $x) }", json!({"x": 7}));
    assert_eq!(response, json!({"data": {"f": 7}}));
}

#[test]
fn variable_defaults_and_argument_defaults() {
    assert_eq!(
        run("query ($x: Int = 5) { g(x: $x) }", json!({})),
        json!({"data": {"g": 5}}),
    );
    assert_eq!(run("{ g }", json!({})), json!({"data": {"g": 3}}));
    assert_eq!(
        run("query ($x: Int) { g(x: $x) }", json!({})),
        json!({"data": {"g": 3}}),
    );
    assert_eq!(
        run("query ($x: Int) { g(x: $x) }", json!({"x": null})),
        json!({"data": {"g": null}}),
    );
}

#[test]
fn required_and_non_null_variables() {
    let response = run("query ($x: Int!) { f(x: $x) }", json!({}));
    assert_eq!(
        response["errors"][0]["message"],
        "Variable '$x' of required type 'Int!' was not provided.",
    );

    let response = run("query ($x: Int!) { f(x: $x) }", json!({"x": null}));
    assert_eq!(
        response["errors"][0]["message"],
        "Variable '$x' of non-null type 'Int!' must not be null.",
    );
}

#[test]
fn nested_input_errors_carry_a_path() {
    let response = run(
        "query ($filter: Filter) { search(filter: $filter) }",
        json!({"filter": {"size": "big", "tags": ["a", null]}}),
    );
    let messages = response["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["message"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        vec![
            "Variable '$filter' got invalid value \"big\" at 'filter.size'; Int cannot \
            represent non-integer value: \"big\"",
            "Variable '$filter' got invalid value null at 'filter.tags[1]'; Expected \
            non-nullable type 'String!' not to be null.",
        ],
    );
}

#[test]
fn list_inputs_accept_single_values() {
    let response = run(
        "query ($filter: Filter) { search(filter: $filter) }",
        json!({"filter": {"tags": "solo"}}),
    );
    assert_eq!(response, json!({"data": {"search": r#"{"tags":["solo"]}"#}}));
}

#[test]
fn non_input_variable_types_are_rejected() {
    let response = run("query ($q: Query) { f(x: 1) }", json!({}));
    assert_eq!(
        response["errors"][0]["message"],
        "Variable '$q' expected value of type 'Query' which cannot be used as an input type.",
    );
}

#[test]
fn variable_errors_are_capped() {
    let schema = build_schema(SCHEMA).unwrap();
    let document = parse("query ($a: Int!, $b: Int!, $c: Int!) { f(x: $a) }").unwrap();
    let ast::Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let errors = get_variable_values(
        &schema,
        &operation.variable_definitions,
        &variables(json!({"a": "x", "b": "y", "c": "z"})),
        Some(2),
    )
    .unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors[2].message(),
        "Too many errors processing variables, error limit reached. Execution aborted.",
    );
}

#[test]
fn argument_literals_and_out_names() {
    let schema = build_schema(SCHEMA).unwrap();
    let document = parse("{ search(filter: {size: 2, tags: \"x\"}) }").unwrap();
    let ast::Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let ast::Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    let search = schema
        .query_type()
        .and_then(|query| query.fields().get("search"))
        .unwrap();
    let args = get_argument_values(
        &search.args,
        &field.arguments,
        &schema,
        &Map::new(),
        field.loc.as_ref(),
    )
    .unwrap();
    assert_eq!(Value::Object(args), json!({"filter": {"size": 2, "tags": ["x"]}}));
}

/// Runs `{ f }` against `schema` and returns the arguments `f` received.
fn default_args_of_f(schema: &crate::Schema) -> Value {
    let document = parse("{ f }").unwrap();
    let response = execute_sync(ExecutionArgs::new(schema, &document).field_resolver(
        |_source, _info, args| {
            let args = Value::Object(args.clone()).to_string();
            MaybeAsync::Ready(Ok(FieldValue::from(Value::String(args))))
        },
    ))
    .unwrap()
    .to_value();
    serde_json::from_str(response["data"]["f"].as_str().unwrap()).unwrap()
}

#[test]
fn sdl_argument_defaults_are_coerced() {
    let schema = build_schema("type Query { f(x: [Int] = 1): String }").unwrap();
    assert_eq!(default_args_of_f(&schema), json!({"x": [1]}));

    let schema = build_schema(
        "input Settings { a: Int = 5 b: [String] = \"one\" }
        type Query { f(settings: Settings = {}): String }",
    )
    .unwrap();
    assert_eq!(default_args_of_f(&schema), json!({"settings": {"a": 5, "b": ["one"]}}));
}

#[test]
fn input_field_defaults_are_coerced_inside_literals_and_variables() {
    let schema = build_schema(
        "input Settings { ids: [ID] = 7 }
        type Query { f(settings: Settings): String }",
    )
    .unwrap();
    let document = parse(
        "query ($settings: Settings) { literal: f(settings: {}) variable: f(settings: $settings) }",
    )
    .unwrap();
    let response = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .variable_values(variables(json!({"settings": {}})))
            .field_resolver(|_source, _info, args| {
                let args = Value::Object(args.clone()).to_string();
                MaybeAsync::Ready(Ok(FieldValue::from(Value::String(args))))
            }),
    )
    .unwrap()
    .to_value();
    let expected = r#"{"settings":{"ids":["7"]}}"#;
    assert_eq!(response, json!({"data": {"literal": expected, "variable": expected}}));
}

#[test]
fn introspected_argument_defaults_are_coerced() {
    use crate::utilities::build_client_schema;
    use crate::utilities::introspection_from_schema;
    use crate::utilities::IntrospectionOptions;

    let schema = build_schema("type Query { f(x: [Int] = 1): String }").unwrap();
    let introspection = introspection_from_schema(&schema, IntrospectionOptions::default()).unwrap();
    let client_schema = build_client_schema(&introspection).unwrap();
    assert_eq!(default_args_of_f(&client_schema), json!({"x": [1]}));
}

#[test]
fn programmatic_defaults_are_passed_as_given() {
    use crate::schema::SchemaConfig;
    use crate::types::Field;
    use crate::types::InputValue;
    use crate::types::ObjectType;
    use crate::types::TypeRef;

    // An internal value that would not survive coercion as a list of Int.
    let query = ObjectType::new("Query").field(
        Field::new("f", "String").argument(
            InputValue::new("x", TypeRef::named("Int").list()).default_value(json!("raw")),
        ),
    );
    let schema = crate::Schema::new(SchemaConfig::new().query(query)).unwrap();
    assert_eq!(default_args_of_f(&schema), json!({"x": "raw"}));
}

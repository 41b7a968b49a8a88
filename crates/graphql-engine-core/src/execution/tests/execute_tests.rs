use super::variables;
use crate::execute;
use crate::execute_sync;
use crate::execution::default_field_resolver;
use crate::execution::ExecutionArgs;
use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::ArgumentValues;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::Resolved;
use crate::types::TypeRef;
use crate::utilities::build_schema;
use crate::FieldError;
use crate::MaybeAsync;
use crate::Value;
use graphql_engine_parser::parse;
use graphql_engine_parser::PathSegment;
use indexmap::IndexMap;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

fn run(schema: &Schema, query: &str, root_value: Value) -> Value {
    let document = parse(query).unwrap();
    execute_sync(ExecutionArgs::new(schema, &document).root_value(root_value))
        .unwrap()
        .to_value()
}

#[test]
fn skip_wins_over_include() {
    let schema = build_schema("type Query { a: String b: String }").unwrap();
    let response = run(
        &schema,
        "{ a @skip(if: true) @include(if: true) b }",
        Value::Null,
    );
    assert_eq!(response, json!({"data": {"b": null}}));
}

#[test]
fn skip_and_include_read_variables() {
    let schema = build_schema("type Query { a: String b: String }").unwrap();
    let document = parse("query ($skip: Boolean!) { a @skip(if: $skip) b @include(if: $skip) }")
        .unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"a": "A", "b": "B"}))
            .variable_values(variables(json!({"skip": false}))),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"a": "A"})));
}

#[test]
fn aliases_and_arguments() {
    let schema = build_schema("type Query { echo(msg: String!): String }").unwrap();
    let document = parse(r#"{ x: echo(msg: "hi") y: echo(msg: "ho") }"#).unwrap();
    let result = execute_sync(ExecutionArgs::new(&schema, &document).field_resolver(
        |_source, _info, args| MaybeAsync::Ready(Ok(FieldValue::from(args.get("msg").cloned()))),
    ))
    .unwrap();
    assert_eq!(result.to_value(), json!({"data": {"x": "hi", "y": "ho"}}));
}

#[test]
fn non_null_error_propagates_to_root() {
    let schema = build_schema("type Query { a: A! } type A { b: String! }").unwrap();
    let document = parse("{a{b}}").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"a": {}}))
            .field_resolver(|source, info, args| {
                if info.field_name == "b" {
                    return MaybeAsync::Ready(Err(FieldError::new("boom")));
                }
                default_field_resolver(source, info, args)
            }),
    )
    .unwrap();
    assert_eq!(
        result.to_value(),
        json!({
            "data": null,
            "errors": [{
                "message": "boom",
                "locations": [{"line": 1, "column": 4}],
                "path": ["a", "b"],
            }],
        }),
    );
}

#[test]
fn non_null_error_nulls_nearest_nullable_ancestor() {
    let schema = build_schema("type Query { a: A } type A { b: String! c: String }").unwrap();
    let document = parse("{ a { b c } }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"a": {"c": "C"}}))
            .field_resolver(|source, info, args| {
                if info.field_name == "b" {
                    return MaybeAsync::Ready(Err(FieldError::new("boom")));
                }
                default_field_resolver(source, info, args)
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"a": null})));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].path(),
        Some(&[PathSegment::from("a"), PathSegment::from("b")][..]),
    );
}

#[test]
fn nullable_field_error_only_nulls_the_field() {
    let schema = build_schema("type Query { a: A } type A { b: String c: String }").unwrap();
    let document = parse("{ a { b c } }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"a": {"c": "C"}}))
            .field_resolver(|source, info, args| {
                if info.field_name == "b" {
                    return MaybeAsync::Ready(Err(FieldError::new("boom")));
                }
                default_field_resolver(source, info, args)
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"a": {"b": null, "c": "C"}})));
    assert_eq!(result.errors[0].message(), "boom");
}

#[test]
fn null_list_item_under_non_null_nulls_the_list() {
    let schema = build_schema("type Query { items: [Int!] }").unwrap();
    let response = run(&schema, "{ items }", json!({"items": [1, null, 3]}));
    assert_eq!(
        response,
        json!({
            "data": {"items": null},
            "errors": [{
                "message": "Cannot return null for non-nullable field Query.items.",
                "locations": [{"line": 1, "column": 3}],
                "path": ["items", 1],
            }],
        }),
    );
}

#[test]
fn list_items_complete_in_order() {
    let schema = build_schema("type Query { items: [Item] } type Item { id: ID }").unwrap();
    let response = run(
        &schema,
        "{ items { id } }",
        json!({"items": [{"id": 1}, {"id": "two"}, null]}),
    );
    assert_eq!(
        response,
        json!({"data": {"items": [{"id": "1"}, {"id": "two"}, null]}}),
    );
}

#[test]
fn non_iterable_list_value_is_an_error() {
    let schema = build_schema("type Query { items: [Int] }").unwrap();
    let response = run(&schema, "{ items }", json!({"items": 3}));
    assert_eq!(response["data"], json!({"items": null}));
    assert_eq!(
        response["errors"][0]["message"],
        "Expected Iterable, but did not find one for field 'Query.items'.",
    );
}

#[test]
fn leaf_serialization_errors_are_located() {
    let schema = build_schema("type Query { n: Int }").unwrap();
    let response = run(&schema, "{ n }", json!({"n": "abc"}));
    assert_eq!(
        response,
        json!({
            "data": {"n": null},
            "errors": [{
                "message": "Int cannot represent non-integer value: \"abc\"",
                "locations": [{"line": 1, "column": 3}],
                "path": ["n"],
            }],
        }),
    );
}

#[test]
fn typename_and_fragments() {
    let schema = build_schema("type Query { a: String }").unwrap();
    let response = run(
        &schema,
        "{ __typename ...F ... on Query { again: a } } fragment F on Query { a }",
        json!({"a": "A"}),
    );
    assert_eq!(
        response,
        json!({"data": {"__typename": "Query", "a": "A", "again": "A"}}),
    );
}

#[test]
fn default_resolver_calls_functions_with_arguments() {
    let schema = build_schema(r#"type Query { greet(name: String = "world"): String }"#).unwrap();
    let root = FieldValue::Map(IndexMap::from([(
        "greet".to_string(),
        FieldValue::function(|_info, args| {
            let name = args.get("name").and_then(Value::as_str).unwrap_or("nobody");
            MaybeAsync::Ready(Ok(FieldValue::from(format!("hello {name}"))))
        }),
    )]));
    let document = parse(r#"{ default: greet named: greet(name: "you") }"#).unwrap();
    let result = execute_sync(ExecutionArgs::new(&schema, &document).root_value(root)).unwrap();
    assert_eq!(
        result.data,
        Some(json!({"default": "hello world", "named": "hello you"})),
    );
}

#[test]
fn field_resolvers_from_builders() {
    let query = ObjectType::new("Query").field(
        Field::new("double", TypeRef::named("Int"))
            .argument(InputValue::new("n", TypeRef::named("Int").non_null()))
            .resolver(|_source, _info, args| {
                let n = args.get("n").and_then(Value::as_i64).unwrap_or_default();
                MaybeAsync::Ready(Ok(FieldValue::from(n * 2)))
            }),
    );
    let schema = Schema::new(SchemaConfig::new().query(query)).unwrap();
    assert_eq!(
        run(&schema, "{ double(n: 21) }", Value::Null),
        json!({"data": {"double": 42}}),
    );
}

#[test]
fn missing_required_argument_is_a_field_error() {
    let schema = build_schema("type Query { f(x: Int!): Int }").unwrap();
    let response = run(&schema, "{ f }", Value::Null);
    assert_eq!(response["data"], json!({"f": null}));
    assert_eq!(
        response["errors"][0]["message"],
        "Argument 'x' of required type 'Int!' was not provided.",
    );
}

#[test]
fn context_value_reaches_resolvers() {
    struct Viewer {
        name: &'static str,
    }

    let schema = build_schema("type Query { me: String }").unwrap();
    let document = parse("{ me }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .context_value(Viewer { name: "ada" })
            .field_resolver(|_source, info, _args| {
                let name = info.context::<Viewer>().map(|viewer| viewer.name);
                MaybeAsync::Ready(Ok(FieldValue::from(name)))
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"me": "ada"})));
}

#[test]
fn operation_selection() {
    let schema = build_schema("type Query { a: String b: String }").unwrap();
    let document = parse("query A { a } query B { b }").unwrap();

    let result = execute_sync(ExecutionArgs::new(&schema, &document)).unwrap();
    assert_eq!(result.data, None);
    assert_eq!(
        result.errors[0].message(),
        "Must provide operation name if query contains multiple operations.",
    );

    let result = execute_sync(ExecutionArgs::new(&schema, &document).operation_name("C")).unwrap();
    assert_eq!(result.errors[0].message(), "Unknown operation named 'C'.");

    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .operation_name("B")
            .root_value(json!({"b": "B"})),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"b": "B"})));
}

#[test]
fn missing_root_type_fails_the_operation() {
    let schema = build_schema("type Query { a: String }").unwrap();
    let response = run(&schema, "mutation { a }", Value::Null);
    assert_eq!(response["data"], Value::Null);
    assert_eq!(
        response["errors"][0]["message"],
        "Schema is not configured for mutations.",
    );
}

#[test]
fn execute_sync_rejects_pending_resolvers() {
    let schema = build_schema("type Query { a: String }").unwrap();
    let document = parse("{ a }").unwrap();
    let error = execute_sync(ExecutionArgs::new(&schema, &document).field_resolver(
        |_source, _info, _args| {
            MaybeAsync::pending(async {
                futures::future::pending::<()>().await;
                Ok::<_, FieldError>(FieldValue::from("late"))
            })
        },
    ))
    .unwrap_err();
    assert_eq!(
        error.message(),
        "GraphQL execution failed to complete synchronously.",
    );
}

#[tokio::test]
async fn async_resolvers_keep_selection_order() {
    let schema = build_schema("type Query { slow: String fast: String }").unwrap();
    let document = parse("{ slow fast }").unwrap();
    let args = ExecutionArgs::new(&schema, &document).field_resolver(|_source, info, _args| {
        let name = info.field_name.to_string();
        let ticks = if name == "slow" { 3 } else { 1 };
        MaybeAsync::pending(async move {
            for _ in 0..ticks {
                tokio::task::yield_now().await;
            }
            Ok::<_, FieldError>(FieldValue::from(name))
        })
    });

    let pending = execute(args);
    assert!(pending.is_pending());
    let result = pending.await;
    assert_eq!(result.to_value(), json!({"data": {"slow": "slow", "fast": "fast"}}));
    let keys = result
        .data
        .as_ref()
        .and_then(Value::as_object)
        .map(|data| data.keys().cloned().collect::<Vec<_>>());
    assert_eq!(keys, Some(vec!["slow".to_string(), "fast".to_string()]));
}

/// Resolves every field to its own name, one tick later, logging when
/// each resolver starts and finishes.
fn recording_resolver(
    log: Arc<Mutex<Vec<String>>>,
) -> impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved + Send + Sync + 'static {
    move |_source, info, _args| {
        let name = info.field_name.to_string();
        let log = log.clone();
        log.lock().unwrap().push(format!("start {name}"));
        MaybeAsync::pending(async move {
            tokio::task::yield_now().await;
            log.lock().unwrap().push(format!("end {name}"));
            Ok::<_, FieldError>(FieldValue::from(name))
        })
    }
}

#[tokio::test]
async fn mutation_fields_run_serially() {
    let schema = build_schema(
        "type Query { noop: String } type Mutation { first: String second: String }",
    )
    .unwrap();
    let document = parse("mutation { first second }").unwrap();
    let log = Arc::new(Mutex::new(vec![]));
    let result = execute(
        ExecutionArgs::new(&schema, &document).field_resolver(recording_resolver(log.clone())),
    )
    .await;

    assert_eq!(result.data, Some(json!({"first": "first", "second": "second"})));
    assert_eq!(
        *log.lock().unwrap(),
        vec!["start first", "end first", "start second", "end second"],
    );
}

#[tokio::test]
async fn query_fields_start_concurrently() {
    let schema = build_schema("type Query { first: String second: String }").unwrap();
    let document = parse("{ first second }").unwrap();
    let log = Arc::new(Mutex::new(vec![]));
    let result = execute(
        ExecutionArgs::new(&schema, &document).field_resolver(recording_resolver(log.clone())),
    )
    .await;

    assert_eq!(result.data, Some(json!({"first": "first", "second": "second"})));
    let log = log.lock().unwrap();
    assert_eq!(log[..2], ["start first", "start second"]);
}

#[tokio::test]
async fn async_errors_are_sorted_by_location() {
    let schema = build_schema("type Query { a: String b: String }").unwrap();
    let document = parse("{ b a }").unwrap();
    let result = execute(ExecutionArgs::new(&schema, &document).field_resolver(
        |_source, info, _args| {
            let name = info.field_name.to_string();
            let ticks = if name == "b" { 2 } else { 0 };
            MaybeAsync::pending(async move {
                for _ in 0..ticks {
                    tokio::task::yield_now().await;
                }
                Err::<FieldValue, _>(FieldError::new(format!("{name} failed")))
            })
        },
    ))
    .await;

    let messages = result
        .errors
        .iter()
        .map(|error| error.message())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["b failed", "a failed"]);
}

use crate::execute_sync;
use crate::execution::ExecutionArgs;
use crate::execution::FieldValue;
use crate::utilities::build_schema;
use crate::Value;
use graphql_engine_parser::parse;
use serde_json::json;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn suffixed(value: FieldValue, suffix: &str) -> FieldValue {
    match value.to_value() {
        Some(Value::String(text)) => FieldValue::from(format!("{text}{suffix}")),
        _ => value,
    }
}

#[test]
fn middleware_wraps_resolvers() {
    let schema = build_schema("type Query { greeting: String count: Int }").unwrap();
    let document = parse("{ greeting count }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"greeting": "hello", "count": 3}))
            .middleware(|next, source, info, args| {
                next(source, info, args).map_ok(|value| match value.to_value() {
                    Some(Value::String(text)) => FieldValue::from(text.to_uppercase()),
                    _ => value,
                })
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"greeting": "HELLO", "count": 3})));
}

#[test]
fn first_middleware_is_outermost() {
    let schema = build_schema("type Query { word: String }").unwrap();
    let document = parse("{ word }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .root_value(json!({"word": "hi"}))
            .middleware(|next, source, info, args| {
                next(source, info, args).map_ok(|value| suffixed(value, "1"))
            })
            .middleware(|next, source, info, args| {
                next(source, info, args).map_ok(|value| suffixed(value, "2"))
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"word": "hi21"})));
}

#[test]
fn middleware_can_short_circuit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver_calls = calls.clone();
    let schema = build_schema("type Query { secret: String }").unwrap();
    let document = parse("{ secret }").unwrap();
    let result = execute_sync(
        ExecutionArgs::new(&schema, &document)
            .field_resolver(move |_source, _info, _args| {
                resolver_calls.fetch_add(1, Ordering::SeqCst);
                crate::MaybeAsync::Ready(Ok(FieldValue::from("hidden")))
            })
            .middleware(|_next, _source, _info, _args| {
                crate::MaybeAsync::Ready(Ok(FieldValue::from("redacted")))
            }),
    )
    .unwrap();
    assert_eq!(result.data, Some(json!({"secret": "redacted"})));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

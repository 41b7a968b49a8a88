mod execute_tests;
mod middleware_tests;
mod values_tests;

use crate::Value;
use serde_json::Map;

/// Unwraps a `json!({...})` literal into a variables map.
pub(super) fn variables(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

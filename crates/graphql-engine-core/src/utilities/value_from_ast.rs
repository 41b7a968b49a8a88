use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::Value;
use graphql_engine_parser::ast;
use serde_json::Map;
use serde_json::Number;

/// Produces the runtime value a literal denotes when read as `ty`.
///
/// Returns `None` when the literal is not valid for the type (the
/// validator reports those), including references to variables that are
/// missing from `variables`. A returned `Value::Null` is an explicit null.
pub fn value_from_ast(
    value_node: &ast::Value,
    ty: &TypeRef,
    schema: &Schema,
    variables: Option<&Map<String, Value>>,
) -> Option<Value> {
    if let ast::Value::Variable(variable) = value_node {
        let value = variables?.get(&variable.name.value)?;
        if value.is_null() && ty.is_non_null() {
            return None;
        }
        // Variables were coerced already, when the operation started.
        return Some(value.clone());
    }

    match ty {
        TypeRef::NonNull(inner) => {
            if matches!(value_node, ast::Value::Null(_)) {
                return None;
            }
            value_from_ast(value_node, inner, schema, variables)
        },
        _ if matches!(value_node, ast::Value::Null(_)) => Some(Value::Null),
        TypeRef::List(item_type) => match value_node {
            ast::Value::List(list) => {
                let mut coerced = Vec::with_capacity(list.values.len());
                for item in &list.values {
                    if is_missing_variable(item, variables) {
                        if item_type.is_non_null() {
                            return None;
                        }
                        coerced.push(Value::Null);
                    } else {
                        coerced.push(value_from_ast(item, item_type, schema, variables)?);
                    }
                }
                Some(Value::Array(coerced))
            },
            _ => Some(Value::Array(vec![value_from_ast(
                value_node, item_type, schema, variables,
            )?])),
        },
        TypeRef::Named(name) => match schema.get_type(name)? {
            NamedType::InputObject(input_object) => {
                let ast::Value::Object(object) = value_node else {
                    return None;
                };
                let mut coerced = Map::new();
                for field in input_object.fields().values() {
                    let field_node = object
                        .fields
                        .iter()
                        .find(|field_node| field_node.name.value == field.name);
                    match field_node {
                        Some(field_node) if !is_missing_variable(&field_node.value, variables) => {
                            let field_value =
                                value_from_ast(&field_node.value, &field.ty, schema, variables)?;
                            coerced.insert(field.key().to_string(), field_value);
                        },
                        _ => {
                            if let Some(default_value) = field.coerced_default(schema) {
                                coerced.insert(field.key().to_string(), default_value);
                            } else if field.ty.is_non_null() {
                                return None;
                            }
                        },
                    }
                }
                Some(input_object.finish(coerced))
            },
            NamedType::Scalar(scalar) => scalar.parse_literal(value_node, variables).ok(),
            NamedType::Enum(enum_type) => enum_type.parse_literal(value_node).ok(),
            NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => None,
        },
    }
}

/// Reads a literal as plain JSON, with no type to guide it.
///
/// Enum values become strings. Returns `None` only for a reference to a
/// variable missing from `variables`.
pub fn value_from_ast_untyped(
    value_node: &ast::Value,
    variables: Option<&Map<String, Value>>,
) -> Option<Value> {
    match value_node {
        ast::Value::Null(_) => Some(Value::Null),
        ast::Value::Int(int) => Some(match int.value.parse::<i64>() {
            Ok(i) => Value::from(i),
            Err(_) => float_value(&int.value),
        }),
        ast::Value::Float(float) => Some(float_value(&float.value)),
        ast::Value::String(string) => Some(Value::String(string.value.clone())),
        ast::Value::Enum(enum_value) => Some(Value::String(enum_value.value.clone())),
        ast::Value::Boolean(boolean) => Some(Value::Bool(boolean.value)),
        ast::Value::List(list) => Some(Value::Array(
            list.values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables).unwrap_or(Value::Null))
                .collect(),
        )),
        ast::Value::Object(object) => Some(Value::Object(
            object
                .fields
                .iter()
                .filter_map(|field| {
                    value_from_ast_untyped(&field.value, variables)
                        .map(|value| (field.name.value.clone(), value))
                })
                .collect(),
        )),
        ast::Value::Variable(variable) => variables?.get(&variable.name.value).cloned(),
    }
}

fn float_value(raw: &str) -> Value {
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

fn is_missing_variable(value_node: &ast::Value, variables: Option<&Map<String, Value>>) -> bool {
    match value_node {
        ast::Value::Variable(variable) => {
            variables.is_none_or(|variables| !variables.contains_key(&variable.name.value))
        },
        _ => false,
    }
}

//! The five scalars every GraphQL service provides.
//!
//! Coercion follows
//! [Scalars](https://spec.graphql.org/October2021/#sec-Scalars): `Int` is
//! a signed 32-bit integer, `Float` a finite double, and `ID` accepts
//! strings and integers on input but always serializes as a string.

use crate::types::ScalarType;
use crate::utilities::inspect;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use std::sync::Arc;
use std::sync::LazyLock;

pub const GRAPHQL_MAX_INT: i64 = i32::MAX as i64;
pub const GRAPHQL_MIN_INT: i64 = i32::MIN as i64;

pub const SPECIFIED_SCALAR_NAMES: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

static INT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::new("Int")
            .description(
                "The `Int` scalar type represents non-fractional signed whole numeric values. \
                Int can represent values between -(2^31) and 2^31 - 1.",
            )
            .with_serialize(serialize_int)
            .with_parse_value(coerce_int)
            .with_parse_literal(|node, _| parse_int_literal(node)),
    )
});

static FLOAT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::new("Float")
            .description(
                "The `Float` scalar type represents signed double-precision fractional values \
                as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
            )
            .with_serialize(serialize_float)
            .with_parse_value(coerce_float)
            .with_parse_literal(|node, _| parse_float_literal(node)),
    )
});

static STRING: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::new("String")
            .description(
                "The `String` scalar type represents textual data, represented as UTF-8 \
                character sequences. The String type is most often used by GraphQL to \
                represent free-form human-readable text.",
            )
            .with_serialize(serialize_string)
            .with_parse_value(coerce_string)
            .with_parse_literal(|node, _| match node {
                ast::Value::String(string) => Ok(Value::String(string.value.clone())),
                _ => Err(GraphQLError::new(format!(
                    "String cannot represent a non string value: {}",
                    print_ast(node),
                ))
                .with_node(node.loc())),
            }),
    )
});

static BOOLEAN: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::new("Boolean")
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .with_serialize(serialize_boolean)
            .with_parse_value(coerce_boolean)
            .with_parse_literal(|node, _| match node {
                ast::Value::Boolean(boolean) => Ok(Value::Bool(boolean.value)),
                _ => Err(GraphQLError::new(format!(
                    "Boolean cannot represent a non boolean value: {}",
                    print_ast(node),
                ))
                .with_node(node.loc())),
            }),
    )
});

static ID: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::new("ID")
            .description(
                "The `ID` scalar type represents a unique identifier, often used to refetch \
                an object or as key for a cache. The ID type appears in a JSON response as a \
                String; however, it is not intended to be human-readable. When expected as an \
                input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
                will be accepted as an ID.",
            )
            .with_serialize(serialize_id)
            .with_parse_value(coerce_id)
            .with_parse_literal(|node, _| match node {
                ast::Value::String(string) => Ok(Value::String(string.value.clone())),
                ast::Value::Int(int) => Ok(Value::String(int.value.clone())),
                _ => Err(GraphQLError::new(format!(
                    "ID cannot represent a non-string and non-integer value: {}",
                    print_ast(node),
                ))
                .with_node(node.loc())),
            }),
    )
});

pub fn int_scalar() -> Arc<ScalarType> {
    INT.clone()
}

pub fn float_scalar() -> Arc<ScalarType> {
    FLOAT.clone()
}

pub fn string_scalar() -> Arc<ScalarType> {
    STRING.clone()
}

pub fn boolean_scalar() -> Arc<ScalarType> {
    BOOLEAN.clone()
}

pub fn id_scalar() -> Arc<ScalarType> {
    ID.clone()
}

/// The specified scalar with the given name, if any.
pub fn specified_scalar(name: &str) -> Option<Arc<ScalarType>> {
    match name {
        "Int" => Some(int_scalar()),
        "Float" => Some(float_scalar()),
        "String" => Some(string_scalar()),
        "Boolean" => Some(boolean_scalar()),
        "ID" => Some(id_scalar()),
        _ => None,
    }
}

pub fn is_specified_scalar_type(name: &str) -> bool {
    SPECIFIED_SCALAR_NAMES.contains(&name)
}

fn is_integral(num: f64) -> bool {
    num.is_finite() && num.fract() == 0.0
}

fn int_in_range(num: i64, value: &Value) -> Result<Value, GraphQLError> {
    if (GRAPHQL_MIN_INT..=GRAPHQL_MAX_INT).contains(&num) {
        Ok(Value::from(num))
    } else {
        Err(GraphQLError::new(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            inspect(value),
        )))
    }
}

fn serialize_int(value: &Value) -> Result<Value, GraphQLError> {
    let non_integer = || {
        GraphQLError::new(format!(
            "Int cannot represent non-integer value: {}",
            inspect(value),
        ))
    };
    match value {
        Value::Bool(flag) => Ok(Value::from(i64::from(*flag))),
        Value::Number(num) => {
            if let Some(int) = num.as_i64() {
                return int_in_range(int, value);
            }
            match num.as_f64() {
                Some(float) if is_integral(float) => {
                    if float < GRAPHQL_MIN_INT as f64 || float > GRAPHQL_MAX_INT as f64 {
                        Err(GraphQLError::new(format!(
                            "Int cannot represent non 32-bit signed integer value: {}",
                            inspect(value),
                        )))
                    } else {
                        Ok(Value::from(float as i64))
                    }
                },
                _ => Err(non_integer()),
            }
        },
        Value::String(text) if !text.is_empty() => match text.trim().parse::<f64>() {
            Ok(float) if is_integral(float) => {
                if float < GRAPHQL_MIN_INT as f64 || float > GRAPHQL_MAX_INT as f64 {
                    Err(GraphQLError::new(format!(
                        "Int cannot represent non 32-bit signed integer value: {}",
                        inspect(value),
                    )))
                } else {
                    Ok(Value::from(float as i64))
                }
            },
            _ => Err(non_integer()),
        },
        _ => Err(non_integer()),
    }
}

fn coerce_int(value: &Value) -> Result<Value, GraphQLError> {
    let Value::Number(num) = value else {
        return Err(GraphQLError::new(format!(
            "Int cannot represent non-integer value: {}",
            inspect(value),
        )));
    };
    if let Some(int) = num.as_i64() {
        return int_in_range(int, value);
    }
    match num.as_f64() {
        Some(float) if is_integral(float) => {
            if float < GRAPHQL_MIN_INT as f64 || float > GRAPHQL_MAX_INT as f64 {
                Err(GraphQLError::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    inspect(value),
                )))
            } else {
                Ok(Value::from(float as i64))
            }
        },
        _ => Err(GraphQLError::new(format!(
            "Int cannot represent non-integer value: {}",
            inspect(value),
        ))),
    }
}

fn parse_int_literal(node: &ast::Value) -> Result<Value, GraphQLError> {
    let ast::Value::Int(int) = node else {
        return Err(GraphQLError::new(format!(
            "Int cannot represent non-integer value: {}",
            print_ast(node),
        ))
        .with_node(node.loc()));
    };
    match int.value.parse::<i64>() {
        Ok(num) if (GRAPHQL_MIN_INT..=GRAPHQL_MAX_INT).contains(&num) => Ok(Value::from(num)),
        _ => Err(GraphQLError::new(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            int.value,
        ))
        .with_node(node.loc())),
    }
}

/// Floats always come out as JSON floats, so an integral `1` reads as `1.0`.
fn finite_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(num) => num.as_f64().filter(|float| float.is_finite()).map(Value::from),
        _ => None,
    }
}

fn serialize_float(value: &Value) -> Result<Value, GraphQLError> {
    let coerced = match value {
        Value::Bool(flag) => Some(Value::from(f64::from(u8::from(*flag)))),
        Value::String(text) if !text.is_empty() => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|float| float.is_finite())
            .map(Value::from),
        other => finite_number(other),
    };
    coerced.ok_or_else(|| {
        GraphQLError::new(format!(
            "Float cannot represent non numeric value: {}",
            inspect(value),
        ))
    })
}

fn coerce_float(value: &Value) -> Result<Value, GraphQLError> {
    finite_number(value).ok_or_else(|| {
        GraphQLError::new(format!(
            "Float cannot represent non numeric value: {}",
            inspect(value),
        ))
    })
}

fn parse_float_literal(node: &ast::Value) -> Result<Value, GraphQLError> {
    let raw = match node {
        ast::Value::Float(float) => &float.value,
        ast::Value::Int(int) => &int.value,
        _ => {
            return Err(GraphQLError::new(format!(
                "Float cannot represent non numeric value: {}",
                print_ast(node),
            ))
            .with_node(node.loc()));
        },
    };
    raw.parse::<f64>()
        .ok()
        .filter(|float| float.is_finite())
        .map(Value::from)
        .ok_or_else(|| {
            GraphQLError::new(format!("Float cannot represent non numeric value: {raw}"))
                .with_node(node.loc())
        })
}

/// Renders a number the way a response string would show it: integral
/// floats lose their fractional part.
fn number_to_string(num: &serde_json::Number) -> String {
    match num.as_f64() {
        Some(float) if num.is_f64() => float.to_string(),
        _ => num.to_string(),
    }
}

fn serialize_string(value: &Value) -> Result<Value, GraphQLError> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Bool(flag) => Ok(Value::String(flag.to_string())),
        Value::Number(num) => Ok(Value::String(number_to_string(num))),
        _ => Err(GraphQLError::new(format!(
            "String cannot represent value: {}",
            inspect(value),
        ))),
    }
}

fn coerce_string(value: &Value) -> Result<Value, GraphQLError> {
    match value {
        Value::String(_) => Ok(value.clone()),
        _ => Err(GraphQLError::new(format!(
            "String cannot represent a non string value: {}",
            inspect(value),
        ))),
    }
}

fn serialize_boolean(value: &Value) -> Result<Value, GraphQLError> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(num) if num.as_f64().is_some_and(f64::is_finite) => {
            Ok(Value::Bool(num.as_f64() != Some(0.0)))
        },
        _ => Err(GraphQLError::new(format!(
            "Boolean cannot represent a non boolean value: {}",
            inspect(value),
        ))),
    }
}

fn coerce_boolean(value: &Value) -> Result<Value, GraphQLError> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        _ => Err(GraphQLError::new(format!(
            "Boolean cannot represent a non boolean value: {}",
            inspect(value),
        ))),
    }
}

fn id_from(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => Some(value.clone()),
        Value::Number(num) if num.is_i64() || num.is_u64() => Some(Value::String(num.to_string())),
        Value::Number(num) => num
            .as_f64()
            .filter(|float| is_integral(*float))
            .map(|float| Value::String(float.to_string())),
        _ => None,
    }
}

fn serialize_id(value: &Value) -> Result<Value, GraphQLError> {
    id_from(value).ok_or_else(|| {
        GraphQLError::new(format!("ID cannot represent value: {}", inspect(value)))
    })
}

fn coerce_id(value: &Value) -> Result<Value, GraphQLError> {
    id_from(value).ok_or_else(|| {
        GraphQLError::new(format!("ID cannot represent value: {}", inspect(value)))
    })
}

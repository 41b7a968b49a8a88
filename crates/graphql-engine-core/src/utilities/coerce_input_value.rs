use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::utilities::did_you_mean;
use crate::utilities::inspect;
use crate::utilities::suggestion_list;
use crate::Value;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::PathSegment;
use serde_json::Map;
use std::fmt::Write;

/// One failure found while coercing an external input value.
#[derive(Clone, Debug, PartialEq)]
pub struct CoercionError {
    /// Where in the input the failure is, e.g. `["filter", "ids", 2]`.
    pub path: Vec<PathSegment>,
    /// The offending part of the input.
    pub value: Value,
    pub error: GraphQLError,
}

impl CoercionError {
    /// Renders `path` as `.a.b[2]`.
    pub fn path_suffix(&self) -> String {
        print_path_list(&self.path)
    }
}

pub(crate) fn print_path_list(path: &[PathSegment]) -> String {
    let mut printed = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                let _ = write!(printed, ".{key}");
            },
            PathSegment::Index(idx) => {
                let _ = write!(printed, "[{idx}]");
            },
        }
    }
    printed
}

/// Coerces an external input value (e.g. a variable value) into the
/// internal value expected by `ty`.
///
/// Fails on the first problem, with a message such as
/// `Invalid value "x" at 'value.size': Int cannot represent non-integer
/// value: "x"`. Use [`coerce_input_value_with`] to collect every failure.
pub fn coerce_input_value(
    value: &Value,
    ty: &TypeRef,
    schema: &Schema,
) -> Result<Value, GraphQLError> {
    let mut first_error = None;
    let coerced = coerce_input_value_with(value, ty, schema, &mut |failure| {
        if first_error.is_none() {
            first_error = Some(failure);
        }
    });
    match (first_error, coerced) {
        (None, Some(coerced)) => Ok(coerced),
        (Some(failure), _) => {
            let mut prefix = format!("Invalid value {}", inspect(&failure.value));
            if !failure.path.is_empty() {
                let _ = write!(prefix, " at 'value{}'", failure.path_suffix());
            }
            let message = format!("{prefix}: {}", failure.error.message());
            Err(failure.error.with_message(message))
        },
        (None, None) => Err(GraphQLError::new(format!(
            "Invalid value {}: Expected type '{ty}'.",
            inspect(value),
        ))),
    }
}

/// Coerces `value` into `ty`, reporting every failure to `on_error`.
///
/// Returns `None` when the value cannot be coerced. Parts of the input
/// that failed are left out of (or nulled in) the returned value, so the
/// result is only meaningful when `on_error` was never called.
pub fn coerce_input_value_with(
    value: &Value,
    ty: &TypeRef,
    schema: &Schema,
    on_error: &mut dyn FnMut(CoercionError),
) -> Option<Value> {
    let mut path = vec![];
    coerce(value, ty, schema, on_error, &mut path)
}

fn report(
    on_error: &mut dyn FnMut(CoercionError),
    path: &[PathSegment],
    value: &Value,
    error: GraphQLError,
) {
    on_error(CoercionError {
        path: path.to_vec(),
        value: value.clone(),
        error,
    })
}

fn coerce(
    value: &Value,
    ty: &TypeRef,
    schema: &Schema,
    on_error: &mut dyn FnMut(CoercionError),
    path: &mut Vec<PathSegment>,
) -> Option<Value> {
    match ty {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                report(
                    on_error,
                    path,
                    value,
                    GraphQLError::new(format!(
                        "Expected non-nullable type '{ty}' not to be null.",
                    )),
                );
                return None;
            }
            coerce(value, inner, schema, on_error, path)
        },
        _ if value.is_null() => Some(Value::Null),
        TypeRef::List(item_type) => match value {
            Value::Array(items) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    path.push(PathSegment::Index(index));
                    coerced.push(coerce(item, item_type, schema, on_error, path).unwrap_or_default());
                    path.pop();
                }
                Some(Value::Array(coerced))
            },
            // A lone item stands for a list of one.
            _ => coerce(value, item_type, schema, on_error, path)
                .map(|item| Value::Array(vec![item])),
        },
        TypeRef::Named(name) => {
            let Some(named_type) = schema.get_type(name) else {
                report(
                    on_error,
                    path,
                    value,
                    GraphQLError::new(format!("Unknown type '{name}'.")),
                );
                return None;
            };
            match named_type {
                NamedType::InputObject(input_object) => {
                    let Value::Object(object) = value else {
                        report(
                            on_error,
                            path,
                            value,
                            GraphQLError::new(format!(
                                "Expected type '{name}' to be an object.",
                            )),
                        );
                        return None;
                    };
                    let fields = input_object.fields();
                    let mut coerced = Map::new();
                    for field in fields.values() {
                        match object.get(&field.name) {
                            None => {
                                if let Some(default) = field.coerced_default(schema) {
                                    coerced.insert(field.key().to_string(), default);
                                } else if field.ty.is_non_null() {
                                    report(
                                        on_error,
                                        path,
                                        value,
                                        GraphQLError::new(format!(
                                            "Field '{}' of required type '{}' was not provided.",
                                            field.name, field.ty,
                                        )),
                                    );
                                }
                            },
                            Some(field_value) => {
                                path.push(PathSegment::Key(field.name.clone()));
                                if let Some(value) =
                                    coerce(field_value, &field.ty, schema, on_error, path)
                                {
                                    coerced.insert(field.key().to_string(), value);
                                }
                                path.pop();
                            },
                        }
                    }
                    for key in object.keys() {
                        if !fields.contains_key(key) {
                            let suggestions =
                                suggestion_list(key, fields.keys().map(String::as_str));
                            report(
                                on_error,
                                path,
                                value,
                                GraphQLError::new(format!(
                                    "Field '{key}' is not defined by type '{name}'.{}",
                                    did_you_mean(&suggestions, None),
                                )),
                            );
                        }
                    }
                    Some(input_object.finish(coerced))
                },
                NamedType::Scalar(scalar) => match scalar.parse_value(value) {
                    Ok(parsed) => Some(parsed),
                    Err(error) => {
                        report(on_error, path, value, error);
                        None
                    },
                },
                NamedType::Enum(enum_type) => match enum_type.parse_value(value) {
                    Ok(parsed) => Some(parsed),
                    Err(error) => {
                        report(on_error, path, value, error);
                        None
                    },
                },
                NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => {
                    report(
                        on_error,
                        path,
                        value,
                        GraphQLError::new(format!("Expected '{name}' to be an input type.")),
                    );
                    None
                },
            }
        },
    }
}

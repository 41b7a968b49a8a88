use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::Value;
use graphql_engine_parser::ast;

/// Produces a literal that denotes `value` when read as `ty`, serializing
/// leaf values through their type.
///
/// Returns `None` when the value cannot be represented, e.g. a null for a
/// non-null type or a leaf value its type refuses to serialize. Object
/// fields and list items that cannot be represented are left out.
pub fn ast_from_value(value: &Value, ty: &TypeRef, schema: &Schema) -> Option<ast::Value> {
    match ty {
        TypeRef::NonNull(inner) => match ast_from_value(value, inner, schema)? {
            ast::Value::Null(_) => None,
            literal => Some(literal),
        },
        _ if value.is_null() => Some(ast::Value::null()),
        TypeRef::List(item_type) => match value {
            Value::Array(items) => Some(ast::Value::List(ast::ListValue {
                values: items
                    .iter()
                    .filter_map(|item| ast_from_value(item, item_type, schema))
                    .collect(),
                loc: None,
            })),
            _ => ast_from_value(value, item_type, schema),
        },
        TypeRef::Named(name) => match schema.get_type(name)? {
            NamedType::InputObject(input_object) => {
                let Value::Object(object) = value else {
                    return None;
                };
                let fields = input_object
                    .fields()
                    .values()
                    .filter_map(|field| {
                        let field_value = object.get(&field.name)?;
                        Some(ast::ObjectField {
                            name: ast::Name::new(field.name.as_str()),
                            value: ast_from_value(field_value, &field.ty, schema)?,
                            loc: None,
                        })
                    })
                    .collect();
                Some(ast::Value::Object(ast::ObjectValue { fields, loc: None }))
            },
            NamedType::Scalar(scalar) => {
                let serialized = scalar.serialize(value).ok()?;
                leaf_literal(serialized, scalar.name == "ID", false)
            },
            NamedType::Enum(enum_type) => {
                let serialized = enum_type.serialize(value).ok()?;
                leaf_literal(serialized, false, true)
            },
            NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => None,
        },
    }
}

fn leaf_literal(serialized: Value, is_id: bool, is_enum: bool) -> Option<ast::Value> {
    match serialized {
        Value::Null => None,
        Value::Bool(b) => Some(ast::Value::boolean(b)),
        Value::Number(number) => {
            let printed = match (number.as_i64(), number.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) if f.is_finite() => f.to_string(),
                _ => return None,
            };
            if is_integer_string(&printed) {
                Some(ast::Value::int(printed))
            } else {
                Some(ast::Value::float(printed))
            }
        },
        Value::String(s) => {
            if is_enum {
                Some(ast::Value::enum_value(s))
            } else if is_id && is_integer_string(&s) {
                Some(ast::Value::int(s))
            } else {
                Some(ast::Value::string(s))
            }
        },
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Matches `-?(0|[1-9][0-9]*)`.
fn is_integer_string(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        },
    }
}

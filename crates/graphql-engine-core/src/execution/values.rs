//! Coercion of variable values and argument literals.

use crate::schema::Schema;
use crate::types::Directive;
use crate::types::InputValueMap;
use crate::utilities::coerce_input_value_with;
use crate::utilities::inspect;
use crate::utilities::type_from_ast;
use crate::utilities::value_from_ast;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use serde_json::Map;

/// Variable coercion gives up after this many errors.
pub const MAX_VARIABLE_ERRORS: usize = 50;

/// Coerces the request's variable values against the operation's variable
/// definitions.
///
/// Absent variables take their declared default. Every problem is
/// reported, up to `max_errors`; past that an abort error is appended.
pub fn get_variable_values(
    schema: &Schema,
    var_defs: &[ast::VariableDefinition],
    inputs: &Map<String, Value>,
    max_errors: Option<usize>,
) -> Result<Map<String, Value>, Vec<GraphQLError>> {
    let mut errors = vec![];
    let coerced = coerce_variable_values(schema, var_defs, inputs, &mut errors);
    if errors.is_empty() {
        return Ok(coerced);
    }
    if let Some(max_errors) = max_errors
        && errors.len() > max_errors
    {
        errors.truncate(max_errors);
        errors.push(GraphQLError::new(
            "Too many errors processing variables, error limit reached. Execution aborted.",
        ));
    }
    Err(errors)
}

fn coerce_variable_values(
    schema: &Schema,
    var_defs: &[ast::VariableDefinition],
    inputs: &Map<String, Value>,
    errors: &mut Vec<GraphQLError>,
) -> Map<String, Value> {
    let mut coerced = Map::new();
    for var_def in var_defs {
        let var_name = var_def.variable.name.as_str();
        let var_type = match type_from_ast(schema, &var_def.ty) {
            Some(ty) if schema.named_type_of(&ty).is_some_and(|named| named.is_input_type()) => ty,
            _ => {
                errors.push(
                    GraphQLError::new(format!(
                        "Variable '${var_name}' expected value of type '{}' which cannot be \
                        used as an input type.",
                        print_ast(&var_def.ty),
                    ))
                    .with_node(var_def.ty.loc()),
                );
                continue;
            },
        };

        let Some(value) = inputs.get(var_name) else {
            if let Some(default_value) = &var_def.default_value {
                if let Some(value) = value_from_ast(default_value, &var_type, schema, None) {
                    coerced.insert(var_name.to_string(), value);
                }
            } else if var_type.is_non_null() {
                errors.push(
                    GraphQLError::new(format!(
                        "Variable '${var_name}' of required type '{var_type}' was not provided.",
                    ))
                    .with_node(var_def.loc.as_ref()),
                );
            }
            continue;
        };

        if value.is_null() && var_type.is_non_null() {
            errors.push(
                GraphQLError::new(format!(
                    "Variable '${var_name}' of non-null type '{var_type}' must not be null.",
                ))
                .with_node(var_def.loc.as_ref()),
            );
            continue;
        }

        let coerced_value = coerce_input_value_with(value, &var_type, schema, &mut |failure| {
            let mut prefix = format!(
                "Variable '${var_name}' got invalid value {}",
                inspect(&failure.value),
            );
            if !failure.path.is_empty() {
                prefix.push_str(&format!(" at '{var_name}{}'", failure.path_suffix()));
            }
            let message = format!("{prefix}; {}", failure.error.message());
            errors.push(
                failure
                    .error
                    .with_message(message)
                    .with_node(var_def.loc.as_ref()),
            );
        });
        if let Some(coerced_value) = coerced_value {
            coerced.insert(var_name.to_string(), coerced_value);
        }
    }
    coerced
}

/// Coerces the arguments given at a field or directive use against the
/// argument definitions.
///
/// `node` is the field or directive the arguments belong to; it locates
/// errors about missing arguments. Values are keyed by each argument's
/// `out_name` when it has one.
pub fn get_argument_values(
    def_args: &InputValueMap,
    arguments: &[ast::Argument],
    schema: &Schema,
    variable_values: &Map<String, Value>,
    node: Option<&ast::Loc>,
) -> Result<Map<String, Value>, GraphQLError> {
    let mut coerced = Map::new();
    for (name, arg_def) in def_args {
        let arg_type = &arg_def.ty;
        let Some(argument) = arguments.iter().find(|arg| arg.name.as_str() == name) else {
            if let Some(default_value) = arg_def.coerced_default(schema) {
                coerced.insert(arg_def.key().to_string(), default_value);
            } else if arg_type.is_non_null() {
                return Err(GraphQLError::new(format!(
                    "Argument '{name}' of required type '{arg_type}' was not provided.",
                ))
                .with_node(node));
            }
            continue;
        };

        let value_node = &argument.value;
        let mut is_null = matches!(value_node, ast::Value::Null(_));
        if let ast::Value::Variable(variable) = value_node {
            let variable_name = variable.name.as_str();
            let Some(variable_value) = variable_values.get(variable_name) else {
                if let Some(default_value) = arg_def.coerced_default(schema) {
                    coerced.insert(arg_def.key().to_string(), default_value);
                } else if arg_type.is_non_null() {
                    return Err(GraphQLError::new(format!(
                        "Argument '{name}' of required type '{arg_type}' was provided the \
                        variable '${variable_name}' which was not provided a runtime value.",
                    ))
                    .with_node(value_node.loc()));
                }
                continue;
            };
            is_null = variable_value.is_null();
        }

        if is_null && arg_type.is_non_null() {
            return Err(GraphQLError::new(format!(
                "Argument '{name}' of non-null type '{arg_type}' must not be null.",
            ))
            .with_node(value_node.loc()));
        }

        match value_from_ast(value_node, arg_type, schema, Some(variable_values)) {
            Some(value) => {
                coerced.insert(arg_def.key().to_string(), value);
            },
            None => {
                return Err(GraphQLError::new(format!(
                    "Argument '{name}' has invalid value {}.",
                    print_ast(value_node),
                ))
                .with_node(value_node.loc()));
            },
        }
    }
    Ok(coerced)
}

/// The coerced arguments of the first use of `directive` in `directives`,
/// or `None` when it is not used there.
pub fn get_directive_values(
    directive: &Directive,
    directives: &[ast::Directive],
    schema: &Schema,
    variable_values: &Map<String, Value>,
) -> Option<Result<Map<String, Value>, GraphQLError>> {
    let node = directives
        .iter()
        .find(|node| node.name.as_str() == directive.name)?;
    Some(get_argument_values(
        &directive.args,
        &node.arguments,
        schema,
        variable_values,
        node.loc.as_ref(),
    ))
}

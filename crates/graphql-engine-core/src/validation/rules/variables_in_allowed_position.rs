use crate::schema::Schema;
use crate::types::TypeRef;
use crate::utilities::is_type_sub_type_of;
use crate::utilities::type_from_ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Every variable is used only where its type is allowed.
pub fn variables_in_allowed_position<'a>(
    _context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(VariablesInAllowedPosition::default())
}

#[derive(Default)]
struct VariablesInAllowedPosition<'a> {
    var_def_map: HashMap<&'a str, &'a ast::VariableDefinition>,
}

impl<'a> ValidationRule<'a> for VariablesInAllowedPosition<'a> {
    fn enter(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => self.var_def_map.clear(),
            AstNode::VariableDefinition(definition) => {
                self.var_def_map
                    .insert(&definition.variable.name.value, definition);
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        let Some(schema) = context.schema() else {
            return VisitorAction::Continue;
        };
        for usage in context.get_recursive_variable_usages(operation) {
            let var_name = usage.node.name.value.as_str();
            let (Some(var_def), Some(location_type)) = (self.var_def_map.get(var_name), &usage.ty) else {
                continue;
            };
            let Some(var_type) = type_from_ast(schema, &var_def.ty) else {
                continue;
            };
            let allowed = allowed_variable_usage(
                schema,
                &var_type,
                var_def.default_value.as_ref(),
                location_type,
                usage.default_value,
            );
            if !allowed {
                context.report_error(
                    GraphQLError::new(format!(
                        "Variable '${var_name}' of type '{var_type}' used in position \
                        expecting type '{location_type}'.",
                    ))
                    .with_nodes([var_def.loc.as_ref(), usage.node.loc.as_ref()]),
                );
            }
        }
        VisitorAction::Continue
    }
}

/// A nullable variable may flow into a non-null position only when the
/// variable or the position supplies a non-null default.
fn allowed_variable_usage(
    schema: &Schema,
    var_type: &TypeRef,
    var_default_value: Option<&ast::Value>,
    location_type: &TypeRef,
    location_default_value: Option<&Value>,
) -> bool {
    if let TypeRef::NonNull(nullable_location_type) = location_type {
        if !var_type.is_non_null() {
            let has_non_null_variable_default_value =
                var_default_value.is_some_and(|value| !matches!(value, ast::Value::Null(_)));
            let has_location_default_value = location_default_value.is_some();
            if !has_non_null_variable_default_value && !has_location_default_value {
                return false;
            }
            return is_type_sub_type_of(schema, var_type, nullable_location_type);
        }
    }
    is_type_sub_type_of(schema, var_type, location_type)
}

use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashSet;

/// Every variable an operation uses, including through fragments, is
/// defined by that operation.
pub fn no_undefined_variables<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUndefinedVariables::default())
}

#[derive(Default)]
struct NoUndefinedVariables<'a> {
    defined_variable_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for NoUndefinedVariables<'a> {
    fn enter(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => self.defined_variable_names.clear(),
            AstNode::VariableDefinition(definition) => {
                self.defined_variable_names
                    .insert(&definition.variable.name.value);
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        for usage in context.get_recursive_variable_usages(operation) {
            let var_name = usage.node.name.value.as_str();
            if self.defined_variable_names.contains(var_name) {
                continue;
            }
            let message = match &operation.name {
                Some(name) => format!(
                    "Variable '${var_name}' is not defined by operation '{}'.",
                    name.value,
                ),
                None => format!("Variable '${var_name}' is not defined."),
            };
            context.report_error(
                GraphQLError::new(message)
                    .with_nodes([usage.node.loc.as_ref(), operation.loc.as_ref()]),
            );
        }
        VisitorAction::Continue
    }
}

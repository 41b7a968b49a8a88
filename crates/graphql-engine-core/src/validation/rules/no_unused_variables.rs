use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashSet;

/// Every variable an operation defines is used by it or by a fragment it
/// spreads.
pub fn no_unused_variables<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUnusedVariables::default())
}

#[derive(Default)]
struct NoUnusedVariables<'a> {
    variable_definitions: Vec<&'a ast::VariableDefinition>,
}

impl<'a> ValidationRule<'a> for NoUnusedVariables<'a> {
    fn enter(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => self.variable_definitions.clear(),
            AstNode::VariableDefinition(definition) => self.variable_definitions.push(definition),
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        let used_names = context
            .get_recursive_variable_usages(operation)
            .into_iter()
            .map(|usage| usage.node.name.value.as_str())
            .collect::<HashSet<_>>();
        for definition in &self.variable_definitions {
            let var_name = &definition.variable.name.value;
            if used_names.contains(var_name.as_str()) {
                continue;
            }
            let message = match &operation.name {
                Some(name) => format!(
                    "Variable '${var_name}' is never used in operation '{}'.",
                    name.value,
                ),
                None => format!("Variable '${var_name}' is never used."),
            };
            context.report_error(GraphQLError::new(message).with_node(definition.loc.as_ref()));
        }
        VisitorAction::Continue
    }
}

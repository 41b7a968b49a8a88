use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use indexmap::IndexMap;

/// An operation defines each variable once.
pub fn unique_variable_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueVariableNames)
}

struct UniqueVariableNames;

impl<'a> ValidationRule<'a> for UniqueVariableNames {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        let mut definitions_by_name = IndexMap::<&str, Vec<_>>::new();
        for definition in &operation.variable_definitions {
            definitions_by_name
                .entry(definition.variable.name.value.as_str())
                .or_default()
                .push(definition);
        }
        for (name, definitions) in definitions_by_name {
            if definitions.len() > 1 {
                context.report_error(
                    GraphQLError::new(format!("There can be only one variable named '${name}'."))
                        .with_nodes(definitions.iter().map(|def| def.variable.name.loc.as_ref())),
                );
            }
        }
        VisitorAction::Continue
    }
}

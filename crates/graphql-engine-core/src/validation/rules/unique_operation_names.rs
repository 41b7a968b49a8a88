use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Operation names are unique within a document.
pub fn unique_operation_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueOperationNames::default())
}

#[derive(Default)]
struct UniqueOperationNames<'a> {
    known_operation_names: HashMap<&'a str, &'a ast::Name>,
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(operation) => {
                if let Some(name) = &operation.name {
                    match self.known_operation_names.get(name.value.as_str()) {
                        Some(known) => context.report_error(
                            GraphQLError::new(format!(
                                "There can be only one operation named '{}'.",
                                name.value,
                            ))
                            .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
                        ),
                        None => {
                            self.known_operation_names.insert(&name.value, name);
                        },
                    }
                }
                VisitorAction::Skip
            },
            AstNode::FragmentDefinition(_) => VisitorAction::Skip,
            _ => VisitorAction::Continue,
        }
    }
}

use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// An anonymous operation must be the only operation in its document.
pub fn lone_anonymous_operation<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(LoneAnonymousOperation { operation_count: 0 })
}

struct LoneAnonymousOperation {
    operation_count: usize,
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::Document(document) => {
                self.operation_count = document.operations().count();
                VisitorAction::Continue
            },
            AstNode::OperationDefinition(operation) => {
                if operation.name.is_none() && self.operation_count > 1 {
                    context.report_error(
                        GraphQLError::new(
                            "This anonymous operation must be the only defined operation.",
                        )
                        .with_node(operation.loc.as_ref()),
                    );
                }
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}

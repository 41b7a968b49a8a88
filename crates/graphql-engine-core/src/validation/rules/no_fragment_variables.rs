use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Rejects variable definitions on fragments unless validation was asked
/// to accept the legacy syntax.
pub fn no_fragment_variables<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoFragmentVariables)
}

struct NoFragmentVariables;

impl<'a> ValidationRule<'a> for NoFragmentVariables {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => VisitorAction::Skip,
            AstNode::FragmentDefinition(fragment) => {
                let legacy_definitions = fragment
                    .variable_definitions
                    .as_deref()
                    .filter(|definitions| !definitions.is_empty());
                if let Some(definitions) = legacy_definitions {
                    if !context.allow_legacy_fragment_variables() {
                        context.report_error(
                            GraphQLError::new(format!(
                                "Fragment '{}' must not define variables.",
                                fragment.name.value,
                            ))
                            .with_nodes(definitions.iter().map(|def| def.loc.as_ref())),
                        );
                    }
                }
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}

use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Every fragment spread names a fragment defined in the document.
pub fn known_fragment_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownFragmentNames)
}

struct KnownFragmentNames;

impl<'a> ValidationRule<'a> for KnownFragmentNames {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        if let AstNode::FragmentSpread(spread) = node {
            let name = &spread.name;
            if context.get_fragment(&name.value).is_none() {
                context.report_error(
                    GraphQLError::new(format!("Unknown fragment '{}'.", name.value))
                        .with_node(name.loc.as_ref()),
                );
            }
        }
        VisitorAction::Continue
    }
}

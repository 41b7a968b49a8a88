use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashSet;

/// Every fragment is used by some operation, directly or through other
/// fragments.
pub fn no_unused_fragments<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUnusedFragments::default())
}

#[derive(Default)]
struct NoUnusedFragments<'a> {
    operations: Vec<&'a ast::OperationDefinition>,
    fragments: Vec<&'a ast::FragmentDefinition>,
}

impl<'a> ValidationRule<'a> for NoUnusedFragments<'a> {
    fn enter(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(operation) => {
                self.operations.push(operation);
                VisitorAction::Skip
            },
            AstNode::FragmentDefinition(fragment) => {
                self.fragments.push(fragment);
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }

    fn leave(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        if !matches!(node, AstNode::Document(_)) {
            return VisitorAction::Continue;
        }
        let mut used_fragment_names = HashSet::new();
        for operation in &self.operations {
            for fragment in context.get_recursively_referenced_fragments(operation) {
                used_fragment_names.insert(fragment.name.value.as_str());
            }
        }
        for fragment in &self.fragments {
            let name = &fragment.name.value;
            if !used_fragment_names.contains(name.as_str()) {
                context.report_error(
                    GraphQLError::new(format!("Fragment '{name}' is never used."))
                        .with_node(fragment.loc.as_ref()),
                );
            }
        }
        VisitorAction::Continue
    }
}

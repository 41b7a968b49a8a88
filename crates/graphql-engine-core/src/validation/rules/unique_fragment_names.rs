use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Fragment names are unique within a document.
pub fn unique_fragment_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueFragmentNames::default())
}

#[derive(Default)]
struct UniqueFragmentNames<'a> {
    known_fragment_names: HashMap<&'a str, &'a ast::Name>,
}

impl<'a> ValidationRule<'a> for UniqueFragmentNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => VisitorAction::Skip,
            AstNode::FragmentDefinition(fragment) => {
                let name = &fragment.name;
                match self.known_fragment_names.get(name.value.as_str()) {
                    Some(known) => context.report_error(
                        GraphQLError::new(format!(
                            "There can be only one fragment named '{}'.",
                            name.value,
                        ))
                        .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
                    ),
                    None => {
                        self.known_fragment_names.insert(&name.value, name);
                    },
                }
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}

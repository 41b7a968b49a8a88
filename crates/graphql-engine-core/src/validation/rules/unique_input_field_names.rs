use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// An input object literal sets each field once.
pub fn unique_input_field_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueInputFieldNames::default())
}

#[derive(Default)]
struct UniqueInputFieldNames<'a> {
    known_names_stack: Vec<HashMap<&'a str, &'a ast::Name>>,
    known_names: HashMap<&'a str, &'a ast::Name>,
}

impl<'a> ValidationRule<'a> for UniqueInputFieldNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::ObjectValue(_) => {
                self.known_names_stack
                    .push(std::mem::take(&mut self.known_names));
            },
            AstNode::ObjectField(field) => {
                let name = &field.name;
                match self.known_names.get(name.value.as_str()) {
                    Some(known) => context.report_error(
                        GraphQLError::new(format!(
                            "There can be only one input field named '{}'.",
                            name.value,
                        ))
                        .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
                    ),
                    None => {
                        self.known_names.insert(&name.value, name);
                    },
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        if let AstNode::ObjectValue(_) = node {
            self.known_names = self.known_names_stack.pop().unwrap_or_default();
        }
        VisitorAction::Continue
    }
}

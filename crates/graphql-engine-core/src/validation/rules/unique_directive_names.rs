use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Each directive is defined once, and not at all if the schema being
/// extended already has it.
pub fn unique_directive_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueDirectiveNames::default())
}

#[derive(Default)]
struct UniqueDirectiveNames<'a> {
    known_directive_names: HashMap<&'a str, &'a ast::Name>,
}

impl<'a> ValidationRule<'a> for UniqueDirectiveNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::DirectiveDefinition(definition) = node else {
            return VisitorAction::Continue;
        };
        let name = &definition.name;
        let directive_name = name.value.as_str();
        if context
            .schema()
            .is_some_and(|schema| schema.get_directive(directive_name).is_some())
        {
            context.report_error(
                GraphQLError::new(format!(
                    "Directive '@{directive_name}' already exists in the schema. It cannot be \
                    redefined.",
                ))
                .with_node(name.loc.as_ref()),
            );
            return VisitorAction::Skip;
        }
        match self.known_directive_names.get(directive_name) {
            Some(known) => context.report_error(
                GraphQLError::new(format!(
                    "There can be only one directive named '@{directive_name}'.",
                ))
                .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
            ),
            None => {
                self.known_directive_names.insert(directive_name, name);
            },
        }
        VisitorAction::Skip
    }
}

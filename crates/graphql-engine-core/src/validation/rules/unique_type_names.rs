use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Each type is defined once, and not at all if the schema being extended
/// already has it.
pub fn unique_type_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueTypeNames::default())
}

#[derive(Default)]
struct UniqueTypeNames<'a> {
    known_type_names: HashMap<&'a str, &'a ast::Name>,
}

impl<'a> ValidationRule<'a> for UniqueTypeNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let name = match node {
            AstNode::OperationDefinition(_) | AstNode::FragmentDefinition(_) => {
                return VisitorAction::Skip;
            },
            AstNode::ScalarTypeDefinition(def) => &def.name,
            AstNode::ObjectTypeDefinition(def) => &def.name,
            AstNode::InterfaceTypeDefinition(def) => &def.name,
            AstNode::UnionTypeDefinition(def) => &def.name,
            AstNode::EnumTypeDefinition(def) => &def.name,
            AstNode::InputObjectTypeDefinition(def) => &def.name,
            _ => return VisitorAction::Continue,
        };
        let type_name = name.value.as_str();
        if context
            .schema()
            .is_some_and(|schema| schema.get_type(type_name).is_some())
        {
            context.report_error(
                GraphQLError::new(format!(
                    "Type '{type_name}' already exists in the schema. It cannot also be \
                    defined in this type definition.",
                ))
                .with_node(name.loc.as_ref()),
            );
            return VisitorAction::Skip;
        }
        match self.known_type_names.get(type_name) {
            Some(known) => context.report_error(
                GraphQLError::new(format!("There can be only one type named '{type_name}'."))
                    .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
            ),
            None => {
                self.known_type_names.insert(type_name, name);
            },
        }
        VisitorAction::Skip
    }
}

use crate::introspection::INTROSPECTION_TYPE_NAMES;
use crate::types::SPECIFIED_SCALAR_NAMES;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashSet;

/// Every named type reference names a type of the schema or of the
/// document.
pub fn known_type_names<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    let defined_types = context
        .document()
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            ast::Definition::Type(type_def) => {
                Some(type_def.name().value.as_str())
            },
            _ => None,
        })
        .collect();
    Box::new(KnownTypeNames {
        defined_types,
        in_type_system: false,
    })
}

struct KnownTypeNames<'a> {
    defined_types: HashSet<&'a str>,
    in_type_system: bool,
}

impl<'a> ValidationRule<'a> for KnownTypeNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) | AstNode::FragmentDefinition(_) => {
                self.in_type_system = false;
            },
            AstNode::SchemaDefinition(_)
            | AstNode::SchemaExtension(_)
            | AstNode::DirectiveDefinition(_)
            | AstNode::ScalarTypeDefinition(_)
            | AstNode::ObjectTypeDefinition(_)
            | AstNode::InterfaceTypeDefinition(_)
            | AstNode::UnionTypeDefinition(_)
            | AstNode::EnumTypeDefinition(_)
            | AstNode::InputObjectTypeDefinition(_)
            | AstNode::ScalarTypeExtension(_)
            | AstNode::ObjectTypeExtension(_)
            | AstNode::InterfaceTypeExtension(_)
            | AstNode::UnionTypeExtension(_)
            | AstNode::EnumTypeExtension(_)
            | AstNode::InputObjectTypeExtension(_) => {
                self.in_type_system = true;
            },
            AstNode::NamedType(named_type) => {
                let type_name = named_type.name.value.as_str();
                let schema = context.schema();
                if schema.is_some_and(|schema| schema.get_type(type_name).is_some())
                    || self.defined_types.contains(type_name)
                {
                    return VisitorAction::Continue;
                }
                let is_standard_type = SPECIFIED_SCALAR_NAMES.contains(&type_name)
                    || INTROSPECTION_TYPE_NAMES.contains(&type_name);
                if self.in_type_system && is_standard_type {
                    return VisitorAction::Continue;
                }
                let mut candidates = vec![];
                if self.in_type_system {
                    candidates.extend(SPECIFIED_SCALAR_NAMES);
                    candidates.extend(INTROSPECTION_TYPE_NAMES);
                }
                if let Some(schema) = schema {
                    candidates.extend(schema.type_map().keys().map(String::as_str));
                }
                candidates.extend(self.defined_types.iter().copied());
                candidates.sort_unstable();
                candidates.dedup();
                let suggestions = suggestion_list(type_name, candidates);
                context.report_error(
                    GraphQLError::new(format!(
                        "Unknown type '{type_name}'.{}",
                        did_you_mean(&suggestions, None),
                    ))
                    .with_node(named_type.loc.as_ref()),
                );
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}

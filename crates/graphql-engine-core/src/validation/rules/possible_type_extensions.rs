use crate::types::NamedType;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::rules::type_system_type_name;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use indexmap::IndexMap;

/// Type extensions extend a type that exists, with an extension of the
/// same kind.
pub fn possible_type_extensions<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    let defined_types = context
        .document()
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            ast::Definition::Type(type_def) => Some((type_def.name().value.as_str(), type_def)),
            _ => None,
        })
        .collect();
    Box::new(PossibleTypeExtensions { defined_types })
}

struct PossibleTypeExtensions<'a> {
    defined_types: IndexMap<&'a str, &'a ast::TypeDefinition>,
}

fn definition_kind(definition: &ast::TypeDefinition) -> &'static str {
    match definition {
        ast::TypeDefinition::Scalar(_) => "scalar",
        ast::TypeDefinition::Object(_) => "object",
        ast::TypeDefinition::Interface(_) => "interface",
        ast::TypeDefinition::Union(_) => "union",
        ast::TypeDefinition::Enum(_) => "enum",
        ast::TypeDefinition::InputObject(_) => "input object",
    }
}

fn type_kind(ty: &NamedType) -> &'static str {
    match ty {
        NamedType::Scalar(_) => "scalar",
        NamedType::Object(_) => "object",
        NamedType::Interface(_) => "interface",
        NamedType::Union(_) => "union",
        NamedType::Enum(_) => "enum",
        NamedType::InputObject(_) => "input object",
    }
}

fn extension_kind(node: AstNode<'_>) -> Option<&'static str> {
    let kind = match node {
        AstNode::ScalarTypeExtension(_) => "scalar",
        AstNode::ObjectTypeExtension(_) => "object",
        AstNode::InterfaceTypeExtension(_) => "interface",
        AstNode::UnionTypeExtension(_) => "union",
        AstNode::EnumTypeExtension(_) => "enum",
        AstNode::InputObjectTypeExtension(_) => "input object",
        _ => return None,
    };
    Some(kind)
}

impl<'a> ValidationRule<'a> for PossibleTypeExtensions<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let Some(kind) = extension_kind(node) else {
            return VisitorAction::Continue;
        };
        let Some(type_name) = type_system_type_name(node) else {
            return VisitorAction::Continue;
        };
        let def_node = self.defined_types.get(type_name).copied();
        let schema = context.schema();
        let existing_type = schema.and_then(|schema| schema.get_type(type_name));

        let expected_kind = match (def_node, existing_type) {
            (Some(def_node), _) => Some(definition_kind(def_node)),
            (None, Some(existing_type)) => Some(type_kind(existing_type)),
            (None, None) => None,
        };
        match expected_kind {
            Some(expected_kind) if expected_kind != kind => {
                let error = GraphQLError::new(format!("Cannot extend non-{kind} type '{type_name}'."));
                let error = match def_node {
                    Some(def_node) => error.with_nodes([def_node.loc(), node.loc()]),
                    None => error.with_node(node.loc()),
                };
                context.report_error(error);
            },
            Some(_) => {},
            None => {
                let mut all_type_names = self.defined_types.keys().copied().collect::<Vec<_>>();
                if let Some(schema) = schema {
                    all_type_names.extend(schema.type_map().keys().map(String::as_str));
                }
                let suggestions = suggestion_list(type_name, all_type_names);
                let name_loc = match node {
                    AstNode::ScalarTypeExtension(ext) => ext.name.loc.as_ref(),
                    AstNode::ObjectTypeExtension(ext) => ext.name.loc.as_ref(),
                    AstNode::InterfaceTypeExtension(ext) => ext.name.loc.as_ref(),
                    AstNode::UnionTypeExtension(ext) => ext.name.loc.as_ref(),
                    AstNode::EnumTypeExtension(ext) => ext.name.loc.as_ref(),
                    AstNode::InputObjectTypeExtension(ext) => ext.name.loc.as_ref(),
                    _ => node.loc(),
                };
                context.report_error(
                    GraphQLError::new(format!(
                        "Cannot extend type '{type_name}' because it is not defined.{}",
                        did_you_mean(&suggestions, None),
                    ))
                    .with_node(name_loc),
                );
            },
        }
        VisitorAction::Continue
    }
}

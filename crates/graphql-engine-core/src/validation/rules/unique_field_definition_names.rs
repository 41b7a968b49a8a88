use crate::types::NamedType;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Each field of an object, interface or input object type is defined
/// once, across the definition, its extensions and the schema being
/// extended.
pub fn unique_field_definition_names<'a>(
    _context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueFieldDefinitionNames::default())
}

#[derive(Default)]
struct UniqueFieldDefinitionNames<'a> {
    known_field_names: HashMap<&'a str, HashMap<&'a str, &'a ast::Name>>,
}

fn has_field(ty: Option<&NamedType>, field_name: &str) -> bool {
    match ty {
        Some(NamedType::Object(object)) => object.fields().contains_key(field_name),
        Some(NamedType::Interface(interface)) => interface.fields().contains_key(field_name),
        Some(NamedType::InputObject(input_object)) => input_object.fields().contains_key(field_name),
        _ => false,
    }
}

impl<'a> ValidationRule<'a> for UniqueFieldDefinitionNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let (type_name, field_names): (&'a str, Vec<&'a ast::Name>) = match node {
            AstNode::ObjectTypeDefinition(def) => {
                (def.name.value.as_str(), def.fields.iter().map(|f| &f.name).collect())
            },
            AstNode::ObjectTypeExtension(ext) => {
                (ext.name.value.as_str(), ext.fields.iter().map(|f| &f.name).collect())
            },
            AstNode::InterfaceTypeDefinition(def) => {
                (def.name.value.as_str(), def.fields.iter().map(|f| &f.name).collect())
            },
            AstNode::InterfaceTypeExtension(ext) => {
                (ext.name.value.as_str(), ext.fields.iter().map(|f| &f.name).collect())
            },
            AstNode::InputObjectTypeDefinition(def) => {
                (def.name.value.as_str(), def.fields.iter().map(|f| &f.name).collect())
            },
            AstNode::InputObjectTypeExtension(ext) => {
                (ext.name.value.as_str(), ext.fields.iter().map(|f| &f.name).collect())
            },
            _ => return VisitorAction::Continue,
        };
        let existing_type = context.schema().and_then(|schema| schema.get_type(type_name));
        let known_names = self.known_field_names.entry(type_name).or_default();

        for name in field_names {
            let field_name = name.value.as_str();
            if has_field(existing_type, field_name) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Field '{type_name}.{field_name}' already exists in the schema. It \
                        cannot also be defined in this type extension.",
                    ))
                    .with_node(name.loc.as_ref()),
                );
            } else if let Some(known) = known_names.get(field_name) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Field '{type_name}.{field_name}' can only be defined once.",
                    ))
                    .with_nodes([known.loc.as_ref(), name.loc.as_ref()]),
                );
            } else {
                known_names.insert(field_name, name);
            }
        }
        VisitorAction::Skip
    }
}

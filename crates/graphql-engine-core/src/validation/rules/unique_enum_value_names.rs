use crate::types::NamedType;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Each enum value is defined once per enum, across the definition, its
/// extensions and the schema being extended.
pub fn unique_enum_value_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueEnumValueNames::default())
}

#[derive(Default)]
struct UniqueEnumValueNames<'a> {
    known_value_names: HashMap<&'a str, HashMap<&'a str, &'a ast::Name>>,
}

impl<'a> ValidationRule<'a> for UniqueEnumValueNames<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let (type_name, values) = match node {
            AstNode::EnumTypeDefinition(def) => (def.name.value.as_str(), &def.values),
            AstNode::EnumTypeExtension(ext) => (ext.name.value.as_str(), &ext.values),
            _ => return VisitorAction::Continue,
        };
        let existing_enum = context
            .schema()
            .and_then(|schema| schema.get_type(type_name))
            .and_then(NamedType::as_enum);
        let value_names = self.known_value_names.entry(type_name).or_default();

        for value_def in values {
            let value_name = value_def.name.value.as_str();
            if existing_enum.is_some_and(|existing| existing.values.contains_key(value_name)) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Enum value '{type_name}.{value_name}' already exists in the schema. \
                        It cannot also be defined in this type extension.",
                    ))
                    .with_node(value_def.name.loc.as_ref()),
                );
            } else if let Some(known) = value_names.get(value_name) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Enum value '{type_name}.{value_name}' can only be defined once.",
                    ))
                    .with_nodes([known.loc.as_ref(), value_def.name.loc.as_ref()]),
                );
            } else {
                value_names.insert(value_name, &value_def.name);
            }
        }
        VisitorAction::Skip
    }
}

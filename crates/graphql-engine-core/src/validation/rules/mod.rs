//! The individual validation rules. Each function creates one rule and can
//! be listed in [`ValidationOptions::rules`](crate::validation::ValidationOptions::rules).

mod executable_definitions;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod lone_schema_definition;
mod no_fragment_cycles;
mod no_fragment_variables;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod possible_type_extensions;
mod provided_required_arguments;
mod scalar_leafs;
mod single_field_subscriptions;
mod unique_argument_definition_names;
mod unique_argument_names;
mod unique_directive_names;
mod unique_directives_per_location;
mod unique_enum_value_names;
mod unique_field_definition_names;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_operation_types;
mod unique_type_names;
mod unique_variable_names;
mod values_of_correct_type;
mod variables_are_input_types;
mod variables_in_allowed_position;

pub use executable_definitions::executable_definitions;
pub use fields_on_correct_type::fields_on_correct_type;
pub use fragments_on_composite_types::fragments_on_composite_types;
pub use known_argument_names::known_argument_names;
pub use known_argument_names::known_argument_names_on_directives;
pub use known_directives::known_directives;
pub use known_fragment_names::known_fragment_names;
pub use known_type_names::known_type_names;
pub use lone_anonymous_operation::lone_anonymous_operation;
pub use lone_schema_definition::lone_schema_definition;
pub use no_fragment_cycles::no_fragment_cycles;
pub use no_fragment_variables::no_fragment_variables;
pub use no_undefined_variables::no_undefined_variables;
pub use no_unused_fragments::no_unused_fragments;
pub use no_unused_variables::no_unused_variables;
pub use overlapping_fields_can_be_merged::overlapping_fields_can_be_merged;
pub use possible_fragment_spreads::possible_fragment_spreads;
pub use possible_type_extensions::possible_type_extensions;
pub use provided_required_arguments::provided_required_arguments;
pub use provided_required_arguments::provided_required_arguments_on_directives;
pub use scalar_leafs::scalar_leafs;
pub use single_field_subscriptions::single_field_subscriptions;
pub use unique_argument_definition_names::unique_argument_definition_names;
pub use unique_argument_names::unique_argument_names;
pub use unique_directive_names::unique_directive_names;
pub use unique_directives_per_location::unique_directives_per_location;
pub use unique_enum_value_names::unique_enum_value_names;
pub use unique_field_definition_names::unique_field_definition_names;
pub use unique_fragment_names::unique_fragment_names;
pub use unique_input_field_names::unique_input_field_names;
pub use unique_operation_names::unique_operation_names;
pub use unique_operation_types::unique_operation_types;
pub use unique_type_names::unique_type_names;
pub use unique_variable_names::unique_variable_names;
pub use values_of_correct_type::values_of_correct_type;
pub use variables_are_input_types::variables_are_input_types;
pub use variables_in_allowed_position::variables_in_allowed_position;

use crate::types::specified_directives;
use crate::types::Directive;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::ast::DirectiveLocation;
use std::sync::Arc;

/// The directives available before the document's own definitions: the
/// schema's, or the specified directives when there is no schema.
pub(crate) fn schema_directives(context: &ValidationContext<'_>) -> Vec<Arc<Directive>> {
    match context.schema() {
        Some(schema) => schema.directives().to_vec(),
        None => specified_directives(),
    }
}

pub(crate) fn directive_definitions<'a>(
    document: &'a ast::Document,
) -> impl Iterator<Item = &'a ast::DirectiveDefinition> {
    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            ast::Definition::Directive(directive) => Some(directive),
            _ => None,
        })
}

/// The directives attached to `node`, for nodes that can carry them.
pub(crate) fn directives_of<'a>(node: AstNode<'a>) -> Option<&'a [ast::Directive]> {
    let directives = match node {
        AstNode::OperationDefinition(n) => &n.directives,
        AstNode::VariableDefinition(n) => &n.directives,
        AstNode::Field(n) => &n.directives,
        AstNode::FragmentSpread(n) => &n.directives,
        AstNode::InlineFragment(n) => &n.directives,
        AstNode::FragmentDefinition(n) => &n.directives,
        AstNode::SchemaDefinition(n) => &n.directives,
        AstNode::SchemaExtension(n) => &n.directives,
        AstNode::ScalarTypeDefinition(n) => &n.directives,
        AstNode::ScalarTypeExtension(n) => &n.directives,
        AstNode::ObjectTypeDefinition(n) => &n.directives,
        AstNode::ObjectTypeExtension(n) => &n.directives,
        AstNode::FieldDefinition(n) => &n.directives,
        AstNode::InputValueDefinition(n) => &n.directives,
        AstNode::InterfaceTypeDefinition(n) => &n.directives,
        AstNode::InterfaceTypeExtension(n) => &n.directives,
        AstNode::UnionTypeDefinition(n) => &n.directives,
        AstNode::UnionTypeExtension(n) => &n.directives,
        AstNode::EnumTypeDefinition(n) => &n.directives,
        AstNode::EnumTypeExtension(n) => &n.directives,
        AstNode::EnumValueDefinition(n) => &n.directives,
        AstNode::InputObjectTypeDefinition(n) => &n.directives,
        AstNode::InputObjectTypeExtension(n) => &n.directives,
        _ => return None,
    };
    Some(directives.as_slice())
}

/// Where a directive attached to `node` is applied. Input value
/// definitions are arguments unless they belong to an input object.
pub(crate) fn directive_location(node: AstNode<'_>, in_input_object: bool) -> Option<DirectiveLocation> {
    let location = match node {
        AstNode::OperationDefinition(operation) => match operation.operation {
            ast::OperationType::Query => DirectiveLocation::Query,
            ast::OperationType::Mutation => DirectiveLocation::Mutation,
            ast::OperationType::Subscription => DirectiveLocation::Subscription,
        },
        AstNode::Field(_) => DirectiveLocation::Field,
        AstNode::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
        AstNode::InlineFragment(_) => DirectiveLocation::InlineFragment,
        AstNode::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
        AstNode::VariableDefinition(_) => DirectiveLocation::VariableDefinition,
        AstNode::SchemaDefinition(_) | AstNode::SchemaExtension(_) => DirectiveLocation::Schema,
        AstNode::ScalarTypeDefinition(_) | AstNode::ScalarTypeExtension(_) => {
            DirectiveLocation::Scalar
        },
        AstNode::ObjectTypeDefinition(_) | AstNode::ObjectTypeExtension(_) => {
            DirectiveLocation::Object
        },
        AstNode::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
        AstNode::InterfaceTypeDefinition(_) | AstNode::InterfaceTypeExtension(_) => {
            DirectiveLocation::Interface
        },
        AstNode::UnionTypeDefinition(_) | AstNode::UnionTypeExtension(_) => {
            DirectiveLocation::Union
        },
        AstNode::EnumTypeDefinition(_) | AstNode::EnumTypeExtension(_) => DirectiveLocation::Enum,
        AstNode::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
        AstNode::InputObjectTypeDefinition(_) | AstNode::InputObjectTypeExtension(_) => {
            DirectiveLocation::InputObject
        },
        AstNode::InputValueDefinition(_) if in_input_object => {
            DirectiveLocation::InputFieldDefinition
        },
        AstNode::InputValueDefinition(_) => DirectiveLocation::ArgumentDefinition,
        _ => return None,
    };
    Some(location)
}

/// Whether `node` is a type definition or extension, and if so the name
/// of the type.
pub(crate) fn type_system_type_name<'a>(node: AstNode<'a>) -> Option<&'a str> {
    let name = match node {
        AstNode::ScalarTypeDefinition(n) => &n.name,
        AstNode::ObjectTypeDefinition(n) => &n.name,
        AstNode::InterfaceTypeDefinition(n) => &n.name,
        AstNode::UnionTypeDefinition(n) => &n.name,
        AstNode::EnumTypeDefinition(n) => &n.name,
        AstNode::InputObjectTypeDefinition(n) => &n.name,
        AstNode::ScalarTypeExtension(n) => &n.name,
        AstNode::ObjectTypeExtension(n) => &n.name,
        AstNode::InterfaceTypeExtension(n) => &n.name,
        AstNode::UnionTypeExtension(n) => &n.name,
        AstNode::EnumTypeExtension(n) => &n.name,
        AstNode::InputObjectTypeExtension(n) => &n.name,
        _ => return None,
    };
    Some(name.value.as_str())
}

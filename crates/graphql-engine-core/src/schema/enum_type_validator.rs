use crate::schema::validate::validate_name;
use crate::types::EnumType;
use graphql_engine_parser::GraphQLError;

pub(super) struct EnumTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    type_: &'a EnumType,
}
impl<'a> EnumTypeValidator<'a> {
    pub fn new(type_: &'a EnumType) -> Self {
        Self {
            errors: vec![],
            type_,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        if self.type_.values.is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Enum type {} must define one or more values.",
                    self.type_.name,
                ))
                .with_nodes(
                    std::iter::once(self.type_.ast_node.as_ref().and_then(|n| n.loc.as_ref()))
                        .chain(self.type_.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
                ),
            );
        }

        for (value_name, value) in &self.type_.values {
            validate_name(
                value_name,
                value.ast_node.as_ref().and_then(|node| node.loc.as_ref()),
                &mut self.errors,
            );
        }

        self.errors
    }
}

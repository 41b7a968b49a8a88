use crate::schema::Schema;
use crate::types::UnionType;
use graphql_engine_parser::ast::Loc;
use graphql_engine_parser::GraphQLError;
use std::collections::HashSet;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    type_: &'a UnionType,
    schema: &'a Schema,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            type_,
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        let union_type = self.type_;
        if union_type.types().is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Union type {} must define one or more member types.",
                    union_type.name,
                ))
                .with_nodes(
                    std::iter::once(union_type.ast_node.as_ref().and_then(|n| n.loc.as_ref()))
                        .chain(union_type.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
                ),
            );
        }

        let mut included_type_names = HashSet::new();
        for member_name in union_type.types() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let is_object = self
                .schema
                .get_type(member_name)
                .is_some_and(|member| member.as_object().is_some());
            if !is_object {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Union type {} can only include Object types, it cannot include \
                        {member_name}.",
                        union_type.name,
                    ))
                    .with_nodes(self.member_type_locs(member_name)),
                );
            } else if !included_type_names.insert(member_name.as_str()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Union type {} can only include type {member_name} once.",
                        union_type.name,
                    ))
                    .with_nodes(self.member_type_locs(member_name)),
                );
            }
        }

        self.errors
    }

    fn member_type_locs(&self, member_name: &str) -> Vec<Option<&'a Loc>> {
        let union_type = self.type_;
        union_type
            .ast_node
            .iter()
            .flat_map(|node| &node.types)
            .chain(union_type.extension_ast_nodes.iter().flat_map(|node| &node.types))
            .filter(|named| named.name.value == member_name)
            .map(|named| named.loc.as_ref())
            .collect()
    }
}

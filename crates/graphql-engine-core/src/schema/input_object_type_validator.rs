use crate::schema::validate::deprecated_directive_loc;
use crate::schema::validate::validate_name;
use crate::schema::Schema;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypeRef;
use graphql_engine_parser::GraphQLError;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    type_: &'a InputObjectType,
    schema: &'a Schema,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            type_,
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        let input_object = self.type_;
        if input_object.fields().is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Input Object type {} must define one or more fields.",
                    input_object.name,
                ))
                .with_nodes(
                    std::iter::once(input_object.ast_node.as_ref().and_then(|n| n.loc.as_ref()))
                        .chain(input_object.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
                ),
            );
        }

        for (field_name, field) in input_object.fields() {
            let field_node = field.ast_node.as_ref();
            validate_name(
                field_name,
                field_node.and_then(|node| node.loc.as_ref()),
                &mut self.errors,
            );

            // Input object fields can not be declared with an output type.
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
            if !self
                .schema
                .named_type_of(&field.ty)
                .is_some_and(|ty| ty.is_input_type())
            {
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of {}.{field_name} must be Input Type but got: {}.",
                        input_object.name, field.ty,
                    ))
                    .with_node(field_node.and_then(|node| node.ty.loc())),
                );
            }

            if field.is_required() && field.deprecation_reason.is_some() {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Required input field {}.{field_name} cannot be deprecated.",
                        input_object.name,
                    ))
                    .with_nodes([
                        deprecated_directive_loc(field_node),
                        field_node.and_then(|node| node.ty.loc()),
                    ]),
                );
            }
        }

        self.errors
    }
}

/// Finds cycles of input objects linked only through non-null fields,
/// which no finite value could satisfy.
///
/// One instance is shared across all input objects of a schema so that
/// every type is explored once and each cycle is reported once.
pub(super) struct InputObjectCircularRefsValidator<'a> {
    schema: &'a Schema,
    visited_types: HashSet<&'a str>,
    field_path: Vec<(&'a str, &'a InputValue)>,
    field_path_index_by_type_name: HashMap<&'a str, usize>,
}
impl<'a> InputObjectCircularRefsValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            visited_types: HashSet::new(),
            field_path: vec![],
            field_path_index_by_type_name: HashMap::new(),
        }
    }

    pub fn validate(&mut self, input_object: &'a InputObjectType) -> Vec<GraphQLError> {
        let mut errors = vec![];
        self.detect_cycles(input_object, &mut errors);
        errors
    }

    fn detect_cycles(&mut self, input_object: &'a InputObjectType, errors: &mut Vec<GraphQLError>) {
        let name = input_object.name.as_str();
        if !self.visited_types.insert(name) {
            return;
        }
        self.field_path_index_by_type_name
            .insert(name, self.field_path.len());

        for (field_name, field) in input_object.fields() {
            let TypeRef::NonNull(inner) = &field.ty else {
                continue;
            };
            let TypeRef::Named(inner_name) = inner.as_ref() else {
                continue;
            };
            let Some(field_type) = self
                .schema
                .get_type(inner_name)
                .and_then(|ty| ty.as_input_object())
            else {
                continue;
            };

            self.field_path.push((field_name, field));
            match self.field_path_index_by_type_name.get(field_type.name.as_str()) {
                None => self.detect_cycles(field_type, errors),
                Some(&cycle_index) => {
                    let cycle_path = &self.field_path[cycle_index..];
                    let field_names = cycle_path
                        .iter()
                        .map(|(field_name, _)| *field_name)
                        .collect::<Vec<_>>()
                        .join(".");
                    errors.push(
                        GraphQLError::new(format!(
                            "Cannot reference Input Object '{}' within itself through a \
                            series of non-null fields: '{field_names}'.",
                            field_type.name,
                        ))
                        .with_nodes(cycle_path.iter().map(|(_, field)| {
                            field.ast_node.as_ref().and_then(|node| node.loc.as_ref())
                        })),
                    );
                },
            }
            self.field_path.pop();
        }

        self.field_path_index_by_type_name.remove(name);
    }
}

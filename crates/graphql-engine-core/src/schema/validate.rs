use crate::introspection::is_introspection_type;
use crate::schema::directive_validator::DirectiveValidator;
use crate::schema::enum_type_validator::EnumTypeValidator;
use crate::schema::input_object_type_validator::InputObjectCircularRefsValidator;
use crate::schema::input_object_type_validator::InputObjectTypeValidator;
use crate::schema::object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
use crate::schema::union_type_validator::UnionTypeValidator;
use crate::schema::Schema;
use crate::types::NamedType;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::Loc;
use graphql_engine_parser::ast::OperationType;
use graphql_engine_parser::GraphQLError;

/// Checks the type-system rules a schema must satisfy before it can serve
/// requests.
///
/// The result is computed once per schema and cached. Schemas built with
/// `assume_valid` always report no errors.
pub fn validate_schema(schema: &Schema) -> &[GraphQLError] {
    if schema.assume_valid {
        return &[];
    }
    schema.validation_errors.get_or_init(|| {
        let mut errors = vec![];
        validate_root_types(schema, &mut errors);
        for directive in schema.directives() {
            errors.extend(DirectiveValidator::new(directive, schema).validate());
        }
        validate_types(schema, &mut errors);
        tracing::debug!(errors = errors.len(), "validated schema");
        errors
    })
}

/// Like [`validate_schema`], but folds any errors into one whose message
/// lists every problem, separated by blank lines.
pub fn assert_valid_schema(schema: &Schema) -> Result<(), GraphQLError> {
    let errors = validate_schema(schema);
    if errors.is_empty() {
        return Ok(());
    }
    Err(GraphQLError::new(
        errors
            .iter()
            .map(GraphQLError::message)
            .collect::<Vec<_>>()
            .join("\n\n"),
    ))
}

fn validate_root_types(schema: &Schema, errors: &mut Vec<GraphQLError>) {
    match schema.root_named_type(OperationType::Query) {
        None => errors.push(
            GraphQLError::new("Query root type must be provided.")
                .with_node(schema.ast_node.as_ref().and_then(|node| node.loc.as_ref())),
        ),
        Some(query) if query.as_object().is_none() => errors.push(
            GraphQLError::new(format!(
                "Query root type must be Object type, it cannot be {}.",
                query.name(),
            ))
            .with_node(operation_type_loc(schema, OperationType::Query).or(query.ast_loc())),
        ),
        Some(_) => {},
    }

    for (operation, label) in [
        (OperationType::Mutation, "Mutation"),
        (OperationType::Subscription, "Subscription"),
    ] {
        if let Some(root) = schema.root_named_type(operation)
            && root.as_object().is_none()
        {
            errors.push(
                GraphQLError::new(format!(
                    "{label} root type must be Object type if provided, it cannot be {}.",
                    root.name(),
                ))
                .with_node(operation_type_loc(schema, operation).or(root.ast_loc())),
            );
        }
    }
}

fn operation_type_loc(schema: &Schema, operation: OperationType) -> Option<&Loc> {
    schema
        .ast_node
        .iter()
        .flat_map(|node| &node.operation_types)
        .chain(
            schema
                .extension_ast_nodes
                .iter()
                .flat_map(|node| &node.operation_types),
        )
        .find(|op_type| op_type.operation == operation)
        .and_then(|op_type| op_type.ty.loc.as_ref())
}

fn validate_types(schema: &Schema, errors: &mut Vec<GraphQLError>) {
    let mut circular_refs = InputObjectCircularRefsValidator::new(schema);
    for ty in schema.type_map().values() {
        if !is_introspection_type(ty.name()) {
            validate_name(ty.name(), ty.ast_loc(), errors);
        }
        match ty {
            NamedType::Object(_) | NamedType::Interface(_) => {
                errors.extend(ObjectOrInterfaceTypeValidator::new(ty, schema).validate());
            },
            NamedType::Union(union_type) => {
                errors.extend(UnionTypeValidator::new(union_type, schema).validate());
            },
            NamedType::Enum(enum_type) => {
                errors.extend(EnumTypeValidator::new(enum_type).validate());
            },
            NamedType::InputObject(input_object) => {
                errors.extend(InputObjectTypeValidator::new(input_object, schema).validate());
                errors.extend(circular_refs.validate(input_object));
            },
            NamedType::Scalar(_) => {},
        }
    }
}

/// Names starting with `__` are reserved for introspection.
pub(super) fn validate_name(name: &str, loc: Option<&Loc>, errors: &mut Vec<GraphQLError>) {
    if name.starts_with("__") {
        errors.push(
            GraphQLError::new(format!(
                "Name '{name}' must not begin with '__', which is reserved by GraphQL \
                introspection.",
            ))
            .with_node(loc),
        );
    }
}

/// The `@deprecated` application on an argument or input field definition.
pub(super) fn deprecated_directive_loc(node: Option<&ast::InputValueDefinition>) -> Option<&Loc> {
    node.and_then(|node| {
        node.directives
            .iter()
            .find(|directive| directive.name.value == "deprecated")
    })
    .and_then(|directive| directive.loc.as_ref())
}

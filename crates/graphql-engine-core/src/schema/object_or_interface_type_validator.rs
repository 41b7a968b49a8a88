use crate::schema::validate::deprecated_directive_loc;
use crate::schema::validate::validate_name;
use crate::schema::Schema;
use crate::types::NamedType;
use crate::utilities::is_equal_type;
use crate::utilities::is_type_sub_type_of;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::Loc;
use graphql_engine_parser::GraphQLError;
use std::collections::HashSet;

/// Validates the fields of an object or interface type and the interfaces
/// it claims to implement.
pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    type_: &'a NamedType,
    schema: &'a Schema,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(type_: &'a NamedType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            type_,
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        self.validate_fields();
        self.validate_interfaces();
        self.errors
    }

    fn validate_fields(&mut self) {
        let type_ = self.type_;
        let Some(fields) = type_.fields() else {
            return;
        };

        if fields.is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Type {} must define one or more fields.",
                    type_.name(),
                ))
                .with_nodes(type_.all_ast_locs()),
            );
        }

        for (field_name, field) in fields {
            let field_node = field.ast_node.as_ref();
            validate_name(
                field_name,
                field_node.and_then(|node| node.loc.as_ref()),
                &mut self.errors,
            );

            if !self
                .schema
                .named_type_of(&field.ty)
                .is_some_and(|ty| ty.is_output_type())
            {
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of {}.{field_name} must be Output Type but got: {}.",
                        type_.name(),
                        field.ty,
                    ))
                    .with_node(field_node.and_then(|node| node.ty.loc())),
                );
            }

            for (arg_name, arg) in &field.args {
                let arg_node = arg.ast_node.as_ref();
                validate_name(
                    arg_name,
                    arg_node.and_then(|node| node.loc.as_ref()),
                    &mut self.errors,
                );

                if !self
                    .schema
                    .named_type_of(&arg.ty)
                    .is_some_and(|ty| ty.is_input_type())
                {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "The type of {}.{field_name}({arg_name}:) must be Input Type but \
                            got: {}.",
                            type_.name(),
                            arg.ty,
                        ))
                        .with_node(arg_node.and_then(|node| node.ty.loc())),
                    );
                }

                if arg.is_required() && arg.deprecation_reason.is_some() {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Required argument {}.{field_name}({arg_name}:) cannot be \
                            deprecated.",
                            type_.name(),
                        ))
                        .with_nodes([
                            deprecated_directive_loc(arg_node),
                            arg_node.and_then(|node| node.ty.loc()),
                        ]),
                    );
                }
            }
        }
    }

    fn validate_interfaces(&mut self) {
        let type_ = self.type_;
        let mut iface_names = HashSet::new();
        for iface_name in type_.interfaces() {
            let Some(iface) = self
                .schema
                .get_type(iface_name)
                .filter(|iface| iface.as_interface().is_some())
            else {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {} must only implement Interface types, it cannot implement \
                        {iface_name}.",
                        type_.name(),
                    ))
                    .with_nodes(implements_interface_locs(type_, iface_name)),
                );
                continue;
            };

            if iface_name == type_.name() {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {} cannot implement itself because it would create a circular \
                        reference.",
                        type_.name(),
                    ))
                    .with_nodes(implements_interface_locs(type_, iface_name)),
                );
            }

            if !iface_names.insert(iface_name.as_str()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {} can only implement {iface_name} once.",
                        type_.name(),
                    ))
                    .with_nodes(implements_interface_locs(type_, iface_name)),
                );
                continue;
            }

            self.validate_type_implements_ancestors(iface);
            self.validate_type_implements_interface(iface);
        }
    }

    fn validate_type_implements_interface(&mut self, iface: &'a NamedType) {
        let type_ = self.type_;
        let (Some(type_fields), Some(iface_fields)) = (type_.fields(), iface.fields()) else {
            return;
        };

        for (field_name, iface_field) in iface_fields {
            let Some(type_field) = type_fields.get(field_name) else {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Interface field {}.{field_name} expected but {} does not provide it.",
                        iface.name(),
                        type_.name(),
                    ))
                    .with_nodes(
                        std::iter::once(field_loc(iface_field.ast_node.as_ref()))
                            .chain(type_.all_ast_locs()),
                    ),
                );
                continue;
            };

            // Field types are covariant.
            if !is_type_sub_type_of(self.schema, &type_field.ty, &iface_field.ty) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Interface field {}.{field_name} expects type {} but {}.{field_name} \
                        is type {}.",
                        iface.name(),
                        iface_field.ty,
                        type_.name(),
                        type_field.ty,
                    ))
                    .with_nodes([
                        iface_field.ast_node.as_ref().and_then(|node| node.ty.loc()),
                        type_field.ast_node.as_ref().and_then(|node| node.ty.loc()),
                    ]),
                );
            }

            // Argument types are invariant.
            for (arg_name, iface_arg) in &iface_field.args {
                let Some(type_arg) = type_field.args.get(arg_name) else {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Interface field argument {}.{field_name}({arg_name}:) expected \
                            but {}.{field_name} does not provide it.",
                            iface.name(),
                            type_.name(),
                        ))
                        .with_nodes([
                            iface_arg.ast_node.as_ref().and_then(|node| node.loc.as_ref()),
                            field_loc(type_field.ast_node.as_ref()),
                        ]),
                    );
                    continue;
                };

                if !is_equal_type(&iface_arg.ty, &type_arg.ty) {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Interface field argument {}.{field_name}({arg_name}:) expects \
                            type {} but {}.{field_name}({arg_name}:) is type {}.",
                            iface.name(),
                            iface_arg.ty,
                            type_.name(),
                            type_arg.ty,
                        ))
                        .with_nodes([
                            iface_arg.ast_node.as_ref().and_then(|node| node.ty.loc()),
                            type_arg.ast_node.as_ref().and_then(|node| node.ty.loc()),
                        ]),
                    );
                }
            }

            for (arg_name, type_arg) in &type_field.args {
                if !iface_field.args.contains_key(arg_name) && type_arg.is_required() {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Object field {}.{field_name} includes required argument \
                            {arg_name} that is missing from the Interface field \
                            {}.{field_name}.",
                            type_.name(),
                            iface.name(),
                        ))
                        .with_nodes([
                            type_arg.ast_node.as_ref().and_then(|node| node.loc.as_ref()),
                            field_loc(iface_field.ast_node.as_ref()),
                        ]),
                    );
                }
            }
        }
    }

    fn validate_type_implements_ancestors(&mut self, iface: &'a NamedType) {
        let type_ = self.type_;
        let type_interfaces = type_.interfaces();
        for transitive in iface.interfaces() {
            if type_interfaces.contains(transitive) {
                continue;
            }
            let message = if transitive == type_.name() {
                format!(
                    "Type {} cannot implement {} because it would create a circular \
                    reference.",
                    type_.name(),
                    iface.name(),
                )
            } else {
                format!(
                    "Type {} must implement {transitive} because it is implemented by {}.",
                    type_.name(),
                    iface.name(),
                )
            };
            let mut locs = implements_interface_locs(iface, transitive);
            locs.extend(implements_interface_locs(type_, iface.name()));
            self.errors.push(GraphQLError::new(message).with_nodes(locs));
        }
    }
}

fn field_loc(node: Option<&ast::FieldDefinition>) -> Option<&Loc> {
    node.and_then(|node| node.loc.as_ref())
}

/// The `implements` clause entries of `type_` naming `iface_name`, across
/// its definition and extensions.
fn implements_interface_locs<'t>(type_: &'t NamedType, iface_name: &str) -> Vec<Option<&'t Loc>> {
    let interfaces: Vec<&'t ast::NamedType> = match type_ {
        NamedType::Object(object) => object
            .ast_node
            .iter()
            .flat_map(|node| &node.interfaces)
            .chain(object.extension_ast_nodes.iter().flat_map(|node| &node.interfaces))
            .collect(),
        NamedType::Interface(interface) => interface
            .ast_node
            .iter()
            .flat_map(|node| &node.interfaces)
            .chain(interface.extension_ast_nodes.iter().flat_map(|node| &node.interfaces))
            .collect(),
        _ => vec![],
    };
    interfaces
        .into_iter()
        .filter(|named| named.name.value == iface_name)
        .map(|named| named.loc.as_ref())
        .collect()
}

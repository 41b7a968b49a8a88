use crate::introspection::introspection_type;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::specified_scalar;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InputValueMap;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::utilities::value_from_ast_untyped;
use crate::utilities::BuildSchemaOptions;
use crate::validation::validate_sdl;
use crate::SchemaBuildError;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::OperationType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Produces a new schema from `schema` plus the type definitions, type
/// extensions, directive definitions and schema extensions in `document`.
///
/// `schema` is left untouched. Types the document does not extend are
/// shared with the new schema; extended types keep their resolvers and
/// scalar functions. Unless `options` says the SDL is known to be valid,
/// the document is validated against `schema` first.
pub fn extend_schema(
    schema: &Schema,
    document: &ast::Document,
    options: BuildSchemaOptions,
) -> Result<Schema> {
    if !(options.assume_valid || options.assume_valid_sdl) {
        let errors = validate_sdl(document, Some(schema));
        if !errors.is_empty() {
            return Err(SchemaBuildError::InvalidSdl { errors });
        }
    }
    let config = extend_schema_config(schema.to_config(), document, options.assume_valid)?;
    Schema::new(config)
}

/// Applies the definitions in `document` to `config`.
pub(crate) fn extend_schema_config(
    config: SchemaConfig,
    document: &ast::Document,
    assume_valid: bool,
) -> Result<SchemaConfig> {
    let mut extender = SchemaExtender::default();
    for definition in &document.definitions {
        match definition {
            ast::Definition::Schema(schema_def) => extender.schema_def = Some(schema_def),
            ast::Definition::SchemaExtension(extension) => {
                extender.schema_extensions.push(extension)
            },
            ast::Definition::Type(type_def) => extender.type_defs.push(type_def),
            ast::Definition::TypeExtension(extension) => extender
                .type_extensions
                .entry(extension.name().value.as_str())
                .or_default()
                .push(extension),
            ast::Definition::Directive(directive_def) => {
                extender.directive_defs.push(directive_def)
            },
            ast::Definition::Operation(_) | ast::Definition::Fragment(_) => {},
        }
    }
    if extender.is_empty() {
        return Ok(config);
    }
    extender.apply(config, assume_valid)
}

#[derive(Default)]
struct SchemaExtender<'d> {
    schema_def: Option<&'d ast::SchemaDefinition>,
    schema_extensions: Vec<&'d ast::SchemaExtension>,
    type_defs: Vec<&'d ast::TypeDefinition>,
    type_extensions: HashMap<&'d str, Vec<&'d ast::TypeExtension>>,
    directive_defs: Vec<&'d ast::DirectiveDefinition>,
}

impl<'d> SchemaExtender<'d> {
    fn is_empty(&self) -> bool {
        self.schema_def.is_none()
            && self.schema_extensions.is_empty()
            && self.type_defs.is_empty()
            && self.type_extensions.is_empty()
            && self.directive_defs.is_empty()
    }

    fn apply(self, config: SchemaConfig, assume_valid: bool) -> Result<SchemaConfig> {
        let mut type_map: IndexMap<String, NamedType> = IndexMap::new();
        for existing in &config.types {
            type_map.insert(existing.name().to_string(), self.extend_named_type(existing));
        }
        for type_def in &self.type_defs {
            let name = type_def.name().value.as_str();
            let ty = match specified_scalar(name) {
                Some(scalar) => NamedType::Scalar(scalar),
                None => match introspection_type(name) {
                    Some(introspection) => introspection.clone(),
                    None => self.build_type(type_def),
                },
            };
            type_map.insert(name.to_string(), ty);
        }

        let lookup = |name: &str| {
            type_map
                .get(name)
                .cloned()
                .ok_or_else(|| SchemaBuildError::UnknownType {
                    type_name: name.to_string(),
                })
        };
        let mut operation_types: HashMap<OperationType, NamedType> = HashMap::new();
        for (operation, root) in [
            (OperationType::Query, &config.query),
            (OperationType::Mutation, &config.mutation),
            (OperationType::Subscription, &config.subscription),
        ] {
            if let Some(root) = root {
                operation_types.insert(operation, lookup(root.name())?);
            }
        }
        let operation_type_defs = self
            .schema_def
            .into_iter()
            .flat_map(|schema_def| &schema_def.operation_types)
            .chain(
                self.schema_extensions
                    .iter()
                    .flat_map(|extension| &extension.operation_types),
            );
        for operation_type_def in operation_type_defs {
            operation_types.insert(
                operation_type_def.operation,
                lookup(&operation_type_def.ty.name.value)?,
            );
        }

        let mut directives = config.directives.unwrap_or_default();
        directives.extend(
            self.directive_defs
                .iter()
                .map(|directive_def| Arc::new(build_directive(directive_def))),
        );

        let mut extension_ast_nodes = config.extension_ast_nodes;
        extension_ast_nodes.extend(self.schema_extensions.iter().map(|ext| (*ext).clone()));

        tracing::debug!(
            types = type_map.len(),
            new_types = self.type_defs.len(),
            extended_types = self.type_extensions.len(),
            "extended schema"
        );

        Ok(SchemaConfig {
            description: match self.schema_def {
                Some(schema_def) => schema_def.description.as_ref().map(|d| d.value.clone()),
                None => config.description,
            },
            query: operation_types.remove(&OperationType::Query),
            mutation: operation_types.remove(&OperationType::Mutation),
            subscription: operation_types.remove(&OperationType::Subscription),
            types: type_map.into_values().collect(),
            directives: Some(directives),
            ast_node: self.schema_def.cloned().or(config.ast_node),
            extension_ast_nodes,
            assume_valid,
        })
    }

    fn extensions_of(&self, name: &str) -> &[&'d ast::TypeExtension] {
        self.type_extensions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn extend_named_type(&self, ty: &NamedType) -> NamedType {
        let extensions = self.extensions_of(ty.name());
        if extensions.is_empty() || ty.is_introspection_type() || ty.is_specified_scalar_type() {
            return ty.clone();
        }
        match ty {
            NamedType::Scalar(scalar) => self.extend_scalar_type(scalar, extensions).into(),
            NamedType::Object(object) => self.extend_object_type(object, extensions).into(),
            NamedType::Interface(interface) => {
                self.extend_interface_type(interface, extensions).into()
            },
            NamedType::Union(union_type) => self.extend_union_type(union_type, extensions).into(),
            NamedType::Enum(enum_type) => self.extend_enum_type(enum_type, extensions).into(),
            NamedType::InputObject(input_object) => {
                self.extend_input_object_type(input_object, extensions).into()
            },
        }
    }

    fn extend_scalar_type(
        &self,
        scalar: &ScalarType,
        extensions: &[&ast::TypeExtension],
    ) -> ScalarType {
        let mut extended = scalar.clone();
        for extension in extensions {
            if let ast::TypeExtension::Scalar(extension) = extension {
                if let Some(url) = specified_by_url(&extension.directives) {
                    extended.specified_by_url = Some(url);
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    fn extend_object_type(
        &self,
        object: &ObjectType,
        extensions: &[&ast::TypeExtension],
    ) -> ObjectType {
        let mut extended = object.clone();
        for extension in extensions {
            if let ast::TypeExtension::Object(extension) = extension {
                for interface in &extension.interfaces {
                    extended = extended.interface(interface.name.value.as_str());
                }
                for field in &extension.fields {
                    extended = extended.field(build_field(field));
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    fn extend_interface_type(
        &self,
        interface: &InterfaceType,
        extensions: &[&ast::TypeExtension],
    ) -> InterfaceType {
        let mut extended = interface.clone();
        for extension in extensions {
            if let ast::TypeExtension::Interface(extension) = extension {
                for parent in &extension.interfaces {
                    extended = extended.interface(parent.name.value.as_str());
                }
                for field in &extension.fields {
                    extended = extended.field(build_field(field));
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    fn extend_union_type(
        &self,
        union_type: &UnionType,
        extensions: &[&ast::TypeExtension],
    ) -> UnionType {
        let mut extended = union_type.clone();
        for extension in extensions {
            if let ast::TypeExtension::Union(extension) = extension {
                for member in &extension.types {
                    extended = extended.member(member.name.value.as_str());
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    fn extend_enum_type(
        &self,
        enum_type: &EnumType,
        extensions: &[&ast::TypeExtension],
    ) -> EnumType {
        let mut extended = enum_type.clone();
        for extension in extensions {
            if let ast::TypeExtension::Enum(extension) = extension {
                for value in &extension.values {
                    extended = extended.value(build_enum_value(value));
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    fn extend_input_object_type(
        &self,
        input_object: &InputObjectType,
        extensions: &[&ast::TypeExtension],
    ) -> InputObjectType {
        let mut extended = input_object.clone();
        for extension in extensions {
            if let ast::TypeExtension::InputObject(extension) = extension {
                for field in &extension.fields {
                    extended = extended.field(build_input_value(field));
                }
                extended.extension_ast_nodes.push(extension.clone());
            }
        }
        extended
    }

    /// Builds a new type from its definition, folding in any extensions the
    /// same document declares for it.
    fn build_type(&self, type_def: &ast::TypeDefinition) -> NamedType {
        let built: NamedType = match type_def {
            ast::TypeDefinition::Scalar(def) => {
                let mut scalar = ScalarType::new(def.name.value.as_str());
                scalar.description = description(&def.description);
                scalar.specified_by_url = specified_by_url(&def.directives);
                scalar.ast_node = Some(def.clone());
                scalar.into()
            },
            ast::TypeDefinition::Object(def) => {
                let mut object = ObjectType::new(def.name.value.as_str());
                object.description = description(&def.description);
                for interface in &def.interfaces {
                    object = object.interface(interface.name.value.as_str());
                }
                for field in &def.fields {
                    object = object.field(build_field(field));
                }
                object.ast_node = Some(def.clone());
                object.into()
            },
            ast::TypeDefinition::Interface(def) => {
                let mut interface = InterfaceType::new(def.name.value.as_str());
                interface.description = description(&def.description);
                for parent in &def.interfaces {
                    interface = interface.interface(parent.name.value.as_str());
                }
                for field in &def.fields {
                    interface = interface.field(build_field(field));
                }
                interface.ast_node = Some(def.clone());
                interface.into()
            },
            ast::TypeDefinition::Union(def) => {
                let mut union_type = UnionType::new(def.name.value.as_str());
                union_type.description = description(&def.description);
                for member in &def.types {
                    union_type = union_type.member(member.name.value.as_str());
                }
                union_type.ast_node = Some(def.clone());
                union_type.into()
            },
            ast::TypeDefinition::Enum(def) => {
                let mut enum_type = EnumType::new(def.name.value.as_str());
                enum_type.description = description(&def.description);
                for value in &def.values {
                    enum_type = enum_type.value(build_enum_value(value));
                }
                enum_type.ast_node = Some(def.clone());
                enum_type.into()
            },
            ast::TypeDefinition::InputObject(def) => {
                let mut input_object = InputObjectType::new(def.name.value.as_str());
                input_object.description = description(&def.description);
                for field in &def.fields {
                    input_object = input_object.field(build_input_value(field));
                }
                input_object.ast_node = Some(def.clone());
                input_object.into()
            },
        };
        self.extend_named_type(&built)
    }
}

fn description(node: &Option<ast::StringValue>) -> Option<String> {
    node.as_ref().map(|description| description.value.clone())
}

fn build_directive(node: &ast::DirectiveDefinition) -> Directive {
    let mut directive = Directive::new(
        node.name.value.as_str(),
        node.locations
            .iter()
            .filter_map(|location| location.value.parse().ok()),
    )
    .repeatable(node.repeatable);
    directive.description = description(&node.description);
    directive.args = build_input_value_map(&node.arguments);
    directive.ast_node = Some(node.clone());
    directive
}

fn build_field(node: &ast::FieldDefinition) -> Field {
    let mut field = Field::new(node.name.value.as_str(), TypeRef::from(&node.ty));
    field.description = description(&node.description);
    field.args = build_input_value_map(&node.arguments);
    field.deprecation_reason = deprecation_reason(&node.directives);
    field.ast_node = Some(node.clone());
    field
}

/// Defaults keep their literal for coercion at use; `default_value` holds
/// its plain reading, since the types it refers to may not be built yet.
fn build_input_value(node: &ast::InputValueDefinition) -> InputValue {
    let mut input_value = InputValue::new(node.name.value.as_str(), TypeRef::from(&node.ty));
    input_value.description = description(&node.description);
    input_value.default_value = node
        .default_value
        .as_ref()
        .and_then(|default_value| value_from_ast_untyped(default_value, None));
    input_value.default_literal = node.default_value.clone();
    input_value.deprecation_reason = deprecation_reason(&node.directives);
    input_value.ast_node = Some(node.clone());
    input_value
}

fn build_input_value_map(nodes: &[ast::InputValueDefinition]) -> InputValueMap {
    nodes
        .iter()
        .map(|node| (node.name.value.clone(), build_input_value(node)))
        .collect()
}

fn build_enum_value(node: &ast::EnumValueDefinition) -> EnumValue {
    let mut value = EnumValue::new(node.name.value.as_str());
    value.description = description(&node.description);
    value.deprecation_reason = deprecation_reason(&node.directives);
    value.ast_node = Some(node.clone());
    value
}

fn directive_string_argument<'a>(
    directives: &'a [ast::Directive],
    directive_name: &str,
    arg_name: &str,
) -> Option<Option<&'a str>> {
    let directive = directives
        .iter()
        .find(|directive| directive.name.value == directive_name)?;
    Some(
        directive
            .arguments
            .iter()
            .find(|arg| arg.name.value == arg_name)
            .and_then(|arg| match &arg.value {
                ast::Value::String(value) => Some(value.value.as_str()),
                _ => None,
            }),
    )
}

/// The reason given by `@deprecated`, if the element carries it.
fn deprecation_reason(directives: &[ast::Directive]) -> Option<String> {
    directive_string_argument(directives, "deprecated", "reason")
        .map(|reason| reason.unwrap_or(DEFAULT_DEPRECATION_REASON).to_string())
}

fn specified_by_url(directives: &[ast::Directive]) -> Option<String> {
    directive_string_argument(directives, "specifiedBy", "url")?.map(str::to_string)
}

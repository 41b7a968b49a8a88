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
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::utilities::inspect;
use crate::utilities::value_from_ast_untyped;
use crate::SchemaBuildError;
use crate::Value;
use graphql_engine_parser::ast::DirectiveLocation;
use graphql_engine_parser::parse_const_value;
use indexmap::IndexMap;
use serde_json::Map;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;
type Object = Map<String, Value>;

/// Builds a schema from the `data` of an introspection response, such as
/// the one produced by
/// [`introspection_from_schema`](crate::utilities::introspection_from_schema).
///
/// The result describes the remote schema but cannot execute anything
/// meaningful: it has no resolvers, and custom scalars pass values through
/// unchanged. Specified scalars and introspection types are the engine's
/// own. Default values are read back from their printed literal form.
pub fn build_client_schema(introspection: &Value) -> Result<Schema> {
    let Some(schema_introspection) = introspection
        .get("__schema")
        .and_then(Value::as_object)
    else {
        return Err(SchemaBuildError::InvalidIntrospection {
            detail: inspect(introspection),
        });
    };

    let type_introspections = schema_introspection
        .get("types")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let mut kinds: IndexMap<&str, &str> = IndexMap::new();
    let mut objects: Vec<&Object> = vec![];
    for type_introspection in type_introspections {
        let object = type_introspection.as_object();
        let name = object.and_then(|o| o.get("name")).and_then(Value::as_str);
        let kind = object.and_then(|o| o.get("kind")).and_then(Value::as_str);
        let (Some(object), Some(name), Some(kind)) = (object, name, kind) else {
            return Err(invalid(format!(
                "Invalid or incomplete introspection result. Ensure that a full \
                introspection query is used in order to build a client schema: {}.",
                inspect(type_introspection),
            )));
        };
        kinds.insert(name, kind);
        objects.push(object);
    }

    let builder = ClientSchemaBuilder { kinds };
    let mut types = vec![];
    for object in objects {
        types.push(builder.build_type(object)?);
    }
    let type_named = |name: &str| {
        types.iter().find(|ty| ty.name() == name).cloned()
    };

    let root = |key: &str| -> Result<Option<NamedType>> {
        let Some(root_ref) = schema_introspection.get(key).filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        let name = builder.named_type_ref(root_ref)?;
        match type_named(name) {
            Some(ty @ NamedType::Object(_)) => Ok(Some(ty)),
            _ => Err(invalid(format!(
                "Expected {} to be a GraphQL Object type.",
                inspect(root_ref),
            ))),
        }
    };
    let query = root("queryType")?;
    let mutation = root("mutationType")?;
    let subscription = root("subscriptionType")?;

    let directives = match schema_introspection.get("directives").and_then(Value::as_array) {
        Some(directive_introspections) => directive_introspections
            .iter()
            .map(|directive| builder.build_directive(directive))
            .collect::<Result<Vec<_>>>()?,
        None => vec![],
    };

    tracing::debug!(types = types.len(), "built client schema");
    Schema::new(SchemaConfig {
        description: string_field(schema_introspection, "description"),
        query,
        mutation,
        subscription,
        types,
        directives: Some(directives),
        ..SchemaConfig::default()
    })
}

fn invalid(message: String) -> SchemaBuildError {
    SchemaBuildError::InvalidClientSchema { message }
}

fn string_field(object: &Object, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn list_field<'v>(object: &'v Object, key: &str, what: &str) -> Result<&'v [Value]> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| {
            invalid(format!(
                "Introspection result missing {what}: {}.",
                inspect(&Value::Object(object.clone())),
            ))
        })
}

fn as_object<'v>(value: &'v Value) -> Result<&'v Object> {
    value
        .as_object()
        .ok_or_else(|| invalid(format!("Expected an object, received: {}.", inspect(value))))
}

struct ClientSchemaBuilder<'v> {
    kinds: IndexMap<&'v str, &'v str>,
}

impl<'v> ClientSchemaBuilder<'v> {
    fn build_type(&self, object: &Object) -> Result<NamedType> {
        let name = object.get("name").and_then(Value::as_str).unwrap_or_default();
        if let Some(scalar) = specified_scalar(name) {
            return Ok(NamedType::Scalar(scalar));
        }
        if let Some(introspection) = introspection_type(name) {
            return Ok(introspection.clone());
        }
        let description = string_field(object, "description");
        let kind = object.get("kind").and_then(Value::as_str).unwrap_or_default();
        let ty = match kind {
            "SCALAR" => {
                let mut scalar = ScalarType::new(name);
                scalar.description = description;
                scalar.specified_by_url = string_field(object, "specifiedByURL");
                NamedType::from(scalar)
            },
            "OBJECT" => {
                let mut object_type = ObjectType::new(name);
                object_type.description = description;
                for interface in self.interfaces(object)? {
                    object_type = object_type.interface(interface);
                }
                for field in self.fields(object)? {
                    object_type = object_type.field(field);
                }
                NamedType::from(object_type)
            },
            "INTERFACE" => {
                let mut interface_type = InterfaceType::new(name);
                interface_type.description = description;
                // Older servers omit `interfaces` on interface types.
                if object.get("interfaces").is_some_and(|v| !v.is_null()) {
                    for interface in self.interfaces(object)? {
                        interface_type = interface_type.interface(interface);
                    }
                }
                for field in self.fields(object)? {
                    interface_type = interface_type.field(field);
                }
                NamedType::from(interface_type)
            },
            "UNION" => {
                let mut union_type = UnionType::new(name);
                union_type.description = description;
                for possible_type in list_field(object, "possibleTypes", "possibleTypes")? {
                    let member = self.named_type_ref(possible_type)?;
                    self.expect_kind(possible_type, member, "OBJECT", "Object")?;
                    union_type = union_type.member(member);
                }
                NamedType::from(union_type)
            },
            "ENUM" => {
                let mut enum_type = EnumType::new(name);
                enum_type.description = description;
                for value in list_field(object, "enumValues", "enumValues")? {
                    let value = as_object(value)?;
                    let mut enum_value =
                        EnumValue::new(value.get("name").and_then(Value::as_str).unwrap_or_default());
                    enum_value.description = string_field(value, "description");
                    enum_value.deprecation_reason = string_field(value, "deprecationReason");
                    enum_type = enum_type.value(enum_value);
                }
                NamedType::from(enum_type)
            },
            "INPUT_OBJECT" => {
                let mut input_object = InputObjectType::new(name);
                input_object.description = description;
                for field in list_field(object, "inputFields", "inputFields")? {
                    input_object = input_object.field(self.build_input_value(field)?);
                }
                NamedType::from(input_object)
            },
            _ => {
                return Err(invalid(format!(
                    "Invalid or incomplete introspection result. Received type with \
                    unknown kind: {}.",
                    inspect(&Value::Object(object.clone())),
                )));
            },
        };
        Ok(ty)
    }

    fn interfaces<'o>(&self, object: &'o Object) -> Result<Vec<&'o str>> {
        list_field(object, "interfaces", "interfaces")?
            .iter()
            .map(|interface| {
                let name = self.named_type_ref(interface)?;
                self.expect_kind(interface, name, "INTERFACE", "Interface")?;
                Ok(name)
            })
            .collect()
    }

    fn fields(&self, object: &Object) -> Result<Vec<Field>> {
        list_field(object, "fields", "fields")?
            .iter()
            .map(|field| self.build_field(field))
            .collect()
    }

    fn build_field(&self, field: &Value) -> Result<Field> {
        let field = as_object(field)?;
        let ty_value = field.get("type").unwrap_or(&Value::Null);
        let ty = self.type_ref(ty_value)?;
        if !self.is_kind(ty.named_type(), &["SCALAR", "OBJECT", "INTERFACE", "UNION", "ENUM"]) {
            return Err(invalid(format!(
                "Introspection must provide output type for fields, but received: {}.",
                inspect(ty_value),
            )));
        }
        let mut built = Field::new(
            field.get("name").and_then(Value::as_str).unwrap_or_default(),
            ty,
        );
        built.description = string_field(field, "description");
        built.deprecation_reason = string_field(field, "deprecationReason");
        for arg in list_field(field, "args", "field args")? {
            built = built.argument(self.build_input_value(arg)?);
        }
        Ok(built)
    }

    fn build_input_value(&self, input_value: &Value) -> Result<InputValue> {
        let input_value = as_object(input_value)?;
        let ty_value = input_value.get("type").unwrap_or(&Value::Null);
        let ty = self.type_ref(ty_value)?;
        if !self.is_kind(ty.named_type(), &["SCALAR", "ENUM", "INPUT_OBJECT"]) {
            return Err(invalid(format!(
                "Introspection must provide input type for arguments, but received: {}.",
                inspect(ty_value),
            )));
        }
        let mut built = InputValue::new(
            input_value.get("name").and_then(Value::as_str).unwrap_or_default(),
            ty,
        );
        built.description = string_field(input_value, "description");
        built.deprecation_reason = string_field(input_value, "deprecationReason");
        if let Some(literal) = input_value.get("defaultValue").and_then(Value::as_str) {
            let node = parse_const_value(literal)?;
            built.default_value = value_from_ast_untyped(&node, None);
            built.default_literal = Some(node);
        }
        Ok(built)
    }

    fn build_directive(&self, directive: &Value) -> Result<Arc<Directive>> {
        let directive = as_object(directive)?;
        let name = directive.get("name").and_then(Value::as_str).unwrap_or_default();
        let args = directive
            .get("args")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                invalid(format!(
                    "Introspection result missing directive args: {}.",
                    inspect(&Value::Object(directive.clone())),
                ))
            })?;
        let mut locations = vec![];
        for location in list_field(directive, "locations", "directive locations")? {
            let parsed = location
                .as_str()
                .and_then(|location| location.parse::<DirectiveLocation>().ok())
                .ok_or_else(|| {
                    invalid(format!("Invalid directive location: {}.", inspect(location)))
                })?;
            locations.push(parsed);
        }
        let mut built = Directive::new(name, locations).repeatable(
            directive
                .get("isRepeatable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        );
        built.description = string_field(directive, "description");
        for arg in args {
            built = built.argument(self.build_input_value(arg)?);
        }
        Ok(Arc::new(built))
    }

    fn type_ref(&self, type_ref: &Value) -> Result<TypeRef> {
        let kind = type_ref.get("kind").and_then(Value::as_str);
        match kind {
            Some(wrapper @ ("LIST" | "NON_NULL")) => {
                let Some(of_type) = type_ref.get("ofType").filter(|v| !v.is_null()) else {
                    return Err(invalid(
                        "Decorated type deeper than introspection query.".to_string(),
                    ));
                };
                let inner = self.type_ref(of_type)?;
                if wrapper == "LIST" {
                    return Ok(inner.list());
                }
                if inner.is_non_null() {
                    return Err(invalid(format!(
                        "Expected {} to be a GraphQL nullable type.",
                        inspect(of_type),
                    )));
                }
                Ok(inner.non_null())
            },
            _ => Ok(TypeRef::named(self.named_type_ref(type_ref)?)),
        }
    }

    fn named_type_ref<'a>(&self, type_ref: &'a Value) -> Result<&'a str> {
        let Some(name) = type_ref.get("name").and_then(Value::as_str) else {
            return Err(invalid(format!("Unknown type reference: {}.", inspect(type_ref))));
        };
        if !self.kinds.contains_key(name) {
            return Err(invalid(format!(
                "Invalid or incomplete schema, unknown type: {name}. Ensure that a full \
                introspection query is used in order to build a client schema.",
            )));
        }
        Ok(name)
    }

    fn is_kind(&self, name: &str, kinds: &[&str]) -> bool {
        self.kinds.get(name).is_some_and(|kind| kinds.contains(kind))
    }

    fn expect_kind(&self, type_ref: &Value, name: &str, kind: &str, label: &str) -> Result<()> {
        if self.is_kind(name, &[kind]) {
            return Ok(());
        }
        Err(invalid(format!(
            "Expected {} to be a GraphQL {label} type.",
            inspect(type_ref),
        )))
    }
}

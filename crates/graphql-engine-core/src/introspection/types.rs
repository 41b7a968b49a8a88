use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::introspection::InputValueRef;
use crate::introspection::Introspected;
use crate::schema::Schema;
use crate::types::ArgumentValues;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::Resolved;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::utilities::ast_from_value;
use crate::FieldError;
use crate::MaybeAsync;
use crate::Value;
use graphql_engine_parser::ast::DirectiveLocation;
use graphql_engine_parser::print_ast;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::LazyLock;

static INTROSPECTION_TYPES: LazyLock<IndexMap<String, NamedType>> = LazyLock::new(|| {
    [
        schema_type(),
        directive_type(),
        directive_location_type(),
        type_type(),
        field_type(),
        input_value_type(),
        enum_value_type(),
        type_kind_type(),
    ]
    .into_iter()
    .map(|ty| (ty.name().to_string(), ty))
    .collect()
});

/// The eight introspection types, shared by every schema.
pub fn introspection_types() -> impl Iterator<Item = &'static NamedType> {
    INTROSPECTION_TYPES.values()
}

pub fn introspection_type(name: &str) -> Option<&'static NamedType> {
    INTROSPECTION_TYPES.get(name)
}

fn handle(introspected: Introspected) -> FieldValue {
    FieldValue::Object(Arc::new(introspected))
}

fn type_handle(name: &str) -> FieldValue {
    handle(Introspected::Type(TypeRef::named(name)))
}

fn include_deprecated(args: &ArgumentValues) -> bool {
    args.get("includeDeprecated")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn include_deprecated_arg() -> InputValue {
    InputValue::new("includeDeprecated", "Boolean").default_value(Value::Bool(false))
}

/// Adapts a resolver over an [`Introspected`] source.
fn introspect(
    resolve: impl Fn(&Introspected, &Schema, &ArgumentValues) -> FieldValue + Send + Sync + 'static,
) -> impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved + Send + Sync + 'static {
    move |source, info, args| match source.downcast_ref::<Introspected>() {
        Some(introspected) => MaybeAsync::Ready(Ok(resolve(introspected, info.schema, args))),
        None => MaybeAsync::Ready(Err(FieldError::new(format!(
            "Introspection field '{}.{}' resolved on a value that is not a schema element.",
            info.parent_type.name, info.field_name,
        )))),
    }
}

fn schema_type() -> NamedType {
    ObjectType::new("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
            available types and directives on the server, as well as the entry points for \
            query, mutation, and subscription operations.",
        )
        .field(
            Field::new("description", "String")
                .resolver(introspect(|_, schema, _| schema.description().into())),
        )
        .field(
            Field::new("types", TypeRef::named("__Type").non_null().list().non_null())
                .description("A list of all types supported by this server.")
                .resolver(introspect(|_, schema, _| {
                    FieldValue::List(schema.type_map().keys().map(|name| type_handle(name)).collect())
                })),
        )
        .field(
            Field::new("queryType", TypeRef::named("__Type").non_null())
                .description("The type that query operations will be rooted at.")
                .resolver(introspect(|_, schema, _| {
                    schema.query_type().map(|ty| type_handle(&ty.name)).unwrap_or_default()
                })),
        )
        .field(
            Field::new("mutationType", "__Type")
                .description(
                    "If this server supports mutation, the type that mutation operations will \
                    be rooted at.",
                )
                .resolver(introspect(|_, schema, _| {
                    schema.mutation_type().map(|ty| type_handle(&ty.name)).unwrap_or_default()
                })),
        )
        .field(
            Field::new("subscriptionType", "__Type")
                .description(
                    "If this server support subscription, the type that subscription \
                    operations will be rooted at.",
                )
                .resolver(introspect(|_, schema, _| {
                    schema
                        .subscription_type()
                        .map(|ty| type_handle(&ty.name))
                        .unwrap_or_default()
                })),
        )
        .field(
            Field::new("directives", TypeRef::named("__Directive").non_null().list().non_null())
                .description("A list of all directives supported by this server.")
                .resolver(introspect(|_, schema, _| {
                    FieldValue::List(
                        schema
                            .directives()
                            .iter()
                            .map(|directive| handle(Introspected::Directive(directive.name.clone())))
                            .collect(),
                    )
                })),
        )
        .into()
}

fn directive_type() -> NamedType {
    ObjectType::new("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution and type \
            validation behavior in a GraphQL document.\n\nIn some cases, you need to provide \
            options to alter GraphQL's execution behavior in ways field arguments will not \
            suffice, such as conditionally including or skipping a field. Directives provide \
            this by describing additional information to the executor.",
        )
        .field(
            Field::new("name", TypeRef::named("String").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected
                        .directive(schema)
                        .map(|directive| directive.name.as_str())
                        .into()
                },
            )),
        )
        .field(Field::new("description", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .directive(schema)
                    .and_then(|directive| directive.description.as_deref())
                    .into()
            },
        )))
        .field(
            Field::new("isRepeatable", TypeRef::named("Boolean").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected
                        .directive(schema)
                        .map(|directive| directive.is_repeatable)
                        .into()
                },
            )),
        )
        .field(
            Field::new(
                "locations",
                TypeRef::named("__DirectiveLocation").non_null().list().non_null(),
            )
            .resolver(introspect(|introspected, schema, _| {
                introspected
                    .directive(schema)
                    .map(|directive| {
                        directive
                            .locations
                            .iter()
                            .map(|location| location.as_str())
                            .collect::<Vec<_>>()
                    })
                    .into()
            })),
        )
        .field(
            Field::new("args", TypeRef::named("__InputValue").non_null().list().non_null())
                .argument(include_deprecated_arg())
                .resolver(introspect(|introspected, schema, args| {
                    let include_deprecated = include_deprecated(args);
                    introspected
                        .directive(schema)
                        .map(|directive| {
                            FieldValue::List(
                                directive
                                    .args
                                    .values()
                                    .filter(|arg| include_deprecated || arg.deprecation_reason.is_none())
                                    .map(|arg| {
                                        handle(Introspected::InputValue(InputValueRef::DirectiveArg {
                                            directive_name: directive.name.clone(),
                                            arg_name: arg.name.clone(),
                                        }))
                                    })
                                    .collect(),
                            )
                        })
                        .unwrap_or_default()
                })),
        )
        .into()
}

fn directive_location_type() -> NamedType {
    DirectiveLocation::ALL
        .iter()
        .fold(
            EnumType::new("__DirectiveLocation").description(
                "A Directive can be adjacent to many parts of the GraphQL language, a \
                __DirectiveLocation describes one such possible adjacencies.",
            ),
            |enum_type, location| {
                enum_type.value(EnumValue::new(location.as_str()).description(location.description()))
            },
        )
        .into()
}

/// The kind of a referenced type, consulting the schema for named types.
fn type_kind(type_ref: &TypeRef, schema: &Schema) -> Option<TypeKind> {
    type_ref
        .wrapper_kind()
        .or_else(|| schema.named_type_of(type_ref).map(NamedType::kind))
}

/// The named type behind an `Introspected::Type` handle, if it is not a
/// wrapper.
fn named<'s>(introspected: &Introspected, schema: &'s Schema) -> Option<&'s NamedType> {
    match introspected {
        Introspected::Type(TypeRef::Named(name)) => schema.get_type(name),
        _ => None,
    }
}

fn type_type() -> NamedType {
    ObjectType::new("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
            types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the kind \
            of a type, certain fields describe information about that type. Scalar types \
            provide no information beyond a name, description and optional `specifiedByURL`, \
            while Enum types provide their values. Object and Interface types provide the \
            fields they describe. Abstract types, Union and Interface, provide the Object \
            types possible at runtime. List and NonNull types compose other types.",
        )
        .field(
            Field::new("kind", TypeRef::named("__TypeKind").non_null()).resolver(introspect(
                |introspected, schema, _| match introspected {
                    Introspected::Type(type_ref) => {
                        type_kind(type_ref, schema).map(|kind| kind.as_str()).into()
                    },
                    _ => FieldValue::Null,
                },
            )),
        )
        .field(Field::new("name", "String").resolver(introspect(|introspected, schema, _| {
            named(introspected, schema).map(NamedType::name).into()
        })))
        .field(Field::new("description", "String").resolver(introspect(
            |introspected, schema, _| {
                named(introspected, schema).and_then(NamedType::description).into()
            },
        )))
        .field(Field::new("specifiedByURL", "String").resolver(introspect(
            |introspected, schema, _| {
                named(introspected, schema)
                    .and_then(NamedType::as_scalar)
                    .and_then(|scalar| scalar.specified_by_url.as_deref())
                    .into()
            },
        )))
        .field(
            Field::new("fields", TypeRef::named("__Field").non_null().list())
                .argument(include_deprecated_arg())
                .resolver(introspect(|introspected, schema, args| {
                    let include_deprecated = include_deprecated(args);
                    let Some(ty) = named(introspected, schema) else {
                        return FieldValue::Null;
                    };
                    let Some(fields) = ty.fields() else {
                        return FieldValue::Null;
                    };
                    FieldValue::List(
                        fields
                            .values()
                            .filter(|field| include_deprecated || !field.is_deprecated())
                            .map(|field| {
                                handle(Introspected::Field {
                                    type_name: ty.name().to_string(),
                                    field_name: field.name.clone(),
                                })
                            })
                            .collect(),
                    )
                })),
        )
        .field(
            Field::new("interfaces", TypeRef::named("__Type").non_null().list()).resolver(
                introspect(|introspected, schema, _| match named(introspected, schema) {
                    Some(ty @ (NamedType::Object(_) | NamedType::Interface(_))) => {
                        FieldValue::List(ty.interfaces().iter().map(|name| type_handle(name)).collect())
                    },
                    _ => FieldValue::Null,
                }),
            ),
        )
        .field(
            Field::new("possibleTypes", TypeRef::named("__Type").non_null().list()).resolver(
                introspect(|introspected, schema, _| match named(introspected, schema) {
                    Some(ty) if ty.is_abstract_type() => FieldValue::List(
                        schema
                            .possible_types(ty)
                            .into_iter()
                            .map(|object| type_handle(&object.name))
                            .collect(),
                    ),
                    _ => FieldValue::Null,
                }),
            ),
        )
        .field(
            Field::new("enumValues", TypeRef::named("__EnumValue").non_null().list())
                .argument(include_deprecated_arg())
                .resolver(introspect(|introspected, schema, args| {
                    let include_deprecated = include_deprecated(args);
                    let Some(enum_type) = named(introspected, schema).and_then(NamedType::as_enum)
                    else {
                        return FieldValue::Null;
                    };
                    FieldValue::List(
                        enum_type
                            .values
                            .values()
                            .filter(|value| include_deprecated || !value.is_deprecated())
                            .map(|value| {
                                handle(Introspected::EnumValue {
                                    type_name: enum_type.name.clone(),
                                    value_name: value.name.clone(),
                                })
                            })
                            .collect(),
                    )
                })),
        )
        .field(
            Field::new("inputFields", TypeRef::named("__InputValue").non_null().list())
                .argument(include_deprecated_arg())
                .resolver(introspect(|introspected, schema, args| {
                    let include_deprecated = include_deprecated(args);
                    let Some(input_object) =
                        named(introspected, schema).and_then(NamedType::as_input_object)
                    else {
                        return FieldValue::Null;
                    };
                    FieldValue::List(
                        input_object
                            .fields()
                            .values()
                            .filter(|field| include_deprecated || field.deprecation_reason.is_none())
                            .map(|field| {
                                handle(Introspected::InputValue(InputValueRef::InputField {
                                    type_name: input_object.name.clone(),
                                    field_name: field.name.clone(),
                                }))
                            })
                            .collect(),
                    )
                })),
        )
        .field(Field::new("ofType", "__Type").resolver(introspect(|introspected, _, _| {
            match introspected {
                Introspected::Type(type_ref) => type_ref
                    .of_type()
                    .map(|inner| handle(Introspected::Type(inner.clone())))
                    .unwrap_or_default(),
                _ => FieldValue::Null,
            }
        })))
        .into()
}

fn field_type() -> NamedType {
    ObjectType::new("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each of which has \
            a name, potentially a list of arguments, and a return type.",
        )
        .field(
            Field::new("name", TypeRef::named("String").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected.field(schema).map(|field| field.name.as_str()).into()
                },
            )),
        )
        .field(Field::new("description", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .field(schema)
                    .and_then(|field| field.description.as_deref())
                    .into()
            },
        )))
        .field(
            Field::new("args", TypeRef::named("__InputValue").non_null().list().non_null())
                .argument(include_deprecated_arg())
                .resolver(introspect(|introspected, schema, args| {
                    let include_deprecated = include_deprecated(args);
                    let Introspected::Field {
                        type_name,
                        field_name,
                    } = introspected
                    else {
                        return FieldValue::Null;
                    };
                    let Some(field) = introspected.field(schema) else {
                        return FieldValue::Null;
                    };
                    FieldValue::List(
                        field
                            .args
                            .values()
                            .filter(|arg| include_deprecated || arg.deprecation_reason.is_none())
                            .map(|arg| {
                                handle(Introspected::InputValue(InputValueRef::FieldArg {
                                    type_name: type_name.clone(),
                                    field_name: field_name.clone(),
                                    arg_name: arg.name.clone(),
                                }))
                            })
                            .collect(),
                    )
                })),
        )
        .field(
            Field::new("type", TypeRef::named("__Type").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected
                        .field(schema)
                        .map(|field| handle(Introspected::Type(field.ty.clone())))
                        .unwrap_or_default()
                },
            )),
        )
        .field(
            Field::new("isDeprecated", TypeRef::named("Boolean").non_null()).resolver(introspect(
                |introspected, schema, _| introspected.field(schema).map(Field::is_deprecated).into(),
            )),
        )
        .field(Field::new("deprecationReason", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .field(schema)
                    .and_then(|field| field.deprecation_reason.as_deref())
                    .into()
            },
        )))
        .into()
}

fn input_value_type() -> NamedType {
    ObjectType::new("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of an InputObject \
            are represented as Input Values which describe their type and optionally a default \
            value.",
        )
        .field(
            Field::new("name", TypeRef::named("String").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected.input_value(schema).map(|value| value.name.as_str()).into()
                },
            )),
        )
        .field(Field::new("description", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .input_value(schema)
                    .and_then(|value| value.description.as_deref())
                    .into()
            },
        )))
        .field(
            Field::new("type", TypeRef::named("__Type").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected
                        .input_value(schema)
                        .map(|value| handle(Introspected::Type(value.ty.clone())))
                        .unwrap_or_default()
                },
            )),
        )
        .field(
            Field::new("defaultValue", "String")
                .description(
                    "A GraphQL-formatted string representing the default value for this input \
                    value.",
                )
                .resolver(introspect(|introspected, schema, _| {
                    introspected
                        .input_value(schema)
                        .and_then(|value| {
                            let default_value = value.default_value.as_ref()?;
                            ast_from_value(default_value, &value.ty, schema)
                        })
                        .map(|literal| print_ast(&literal))
                        .into()
                })),
        )
        .field(
            Field::new("isDeprecated", TypeRef::named("Boolean").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected
                        .input_value(schema)
                        .map(|value| value.deprecation_reason.is_some())
                        .into()
                },
            )),
        )
        .field(Field::new("deprecationReason", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .input_value(schema)
                    .and_then(|value| value.deprecation_reason.as_deref())
                    .into()
            },
        )))
        .into()
}

fn enum_value_type() -> NamedType {
    ObjectType::new("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
            placeholder for a string or numeric value. However an Enum value is returned in a \
            JSON response as a string.",
        )
        .field(
            Field::new("name", TypeRef::named("String").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected.enum_value(schema).map(|value| value.name.as_str()).into()
                },
            )),
        )
        .field(Field::new("description", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .enum_value(schema)
                    .and_then(|value| value.description.as_deref())
                    .into()
            },
        )))
        .field(
            Field::new("isDeprecated", TypeRef::named("Boolean").non_null()).resolver(introspect(
                |introspected, schema, _| {
                    introspected.enum_value(schema).map(EnumValue::is_deprecated).into()
                },
            )),
        )
        .field(Field::new("deprecationReason", "String").resolver(introspect(
            |introspected, schema, _| {
                introspected
                    .enum_value(schema)
                    .and_then(|value| value.deprecation_reason.as_deref())
                    .into()
            },
        )))
        .into()
}

fn type_kind_type() -> NamedType {
    TypeKind::ALL
        .iter()
        .fold(
            EnumType::new("__TypeKind")
                .description("An enum describing what kind of type a given `__Type` is."),
            |enum_type, kind| {
                enum_type.value(EnumValue::new(kind.as_str()).description(kind.description()))
            },
        )
        .into()
}

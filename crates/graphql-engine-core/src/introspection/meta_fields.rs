use crate::execution::FieldValue;
use crate::introspection::Introspected;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::MaybeAsync;
use crate::Value;
use std::sync::Arc;
use std::sync::LazyLock;

static SCHEMA_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__schema", TypeRef::named("__Schema").non_null())
        .description("Access the current type schema of this server.")
        .resolver(|_, _, _| {
            MaybeAsync::Ready(Ok(FieldValue::Object(Arc::new(Introspected::Schema))))
        })
});

static TYPE_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__type", "__Type")
        .description("Request the type information of a single type.")
        .argument(InputValue::new("name", TypeRef::named("String").non_null()))
        .resolver(|_, info, args| {
            let found = args
                .get("name")
                .and_then(Value::as_str)
                .and_then(|name| info.schema.get_type(name));
            MaybeAsync::Ready(Ok(match found {
                Some(ty) => FieldValue::Object(Arc::new(Introspected::Type(TypeRef::named(
                    ty.name(),
                )))),
                None => FieldValue::Null,
            }))
        })
});

static TYPE_NAME_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__typename", TypeRef::named("String").non_null())
        .description("The name of the current Object type at runtime.")
        .resolver(|_, info, _| MaybeAsync::Ready(Ok(FieldValue::from(info.parent_type.name.as_str()))))
});

/// `__schema: __Schema!`, available on the query root.
pub fn schema_meta_field_def() -> &'static Field {
    &SCHEMA_META_FIELD
}

/// `__type(name: String!): __Type`, available on the query root.
pub fn type_meta_field_def() -> &'static Field {
    &TYPE_META_FIELD
}

/// `__typename: String!`, available on every composite type.
pub fn type_name_meta_field_def() -> &'static Field {
    &TYPE_NAME_META_FIELD
}

//! The introspection types (`__Schema`, `__Type` and friends) and the
//! `__schema`, `__type` and `__typename` meta fields.
//!
//! Introspection resolvers receive an [`Introspected`] handle as their
//! source and look everything else up through
//! [`ResolveInfo::schema`](crate::execution::ResolveInfo::schema).

mod meta_fields;
mod types;

pub use meta_fields::schema_meta_field_def;
pub use meta_fields::type_meta_field_def;
pub use meta_fields::type_name_meta_field_def;
pub use types::introspection_type;
pub use types::introspection_types;

use crate::schema::Schema;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::types::Directive;

/// The names of the eight introspection types.
pub const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Schema",
    "__Directive",
    "__DirectiveLocation",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__TypeKind",
];

pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}

/// A schema element as seen by introspection resolvers.
///
/// Elements are identified by name so that a handle stays valid for the
/// lifetime of the request without borrowing from the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum Introspected {
    Schema,
    Type(TypeRef),
    Field {
        type_name: String,
        field_name: String,
    },
    InputValue(InputValueRef),
    EnumValue {
        type_name: String,
        value_name: String,
    },
    Directive(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputValueRef {
    FieldArg {
        type_name: String,
        field_name: String,
        arg_name: String,
    },
    DirectiveArg {
        directive_name: String,
        arg_name: String,
    },
    InputField {
        type_name: String,
        field_name: String,
    },
}

impl Introspected {
    pub(crate) fn field<'s>(&self, schema: &'s Schema) -> Option<&'s Field> {
        let Self::Field {
            type_name,
            field_name,
        } = self
        else {
            return None;
        };
        schema.get_type(type_name)?.fields()?.get(field_name)
    }

    pub(crate) fn input_value<'s>(&self, schema: &'s Schema) -> Option<&'s InputValue> {
        let Self::InputValue(input_value) = self else {
            return None;
        };
        match input_value {
            InputValueRef::FieldArg {
                type_name,
                field_name,
                arg_name,
            } => schema
                .get_type(type_name)?
                .fields()?
                .get(field_name)?
                .args
                .get(arg_name),
            InputValueRef::DirectiveArg {
                directive_name,
                arg_name,
            } => schema.get_directive(directive_name)?.args.get(arg_name),
            InputValueRef::InputField {
                type_name,
                field_name,
            } => schema
                .get_type(type_name)?
                .as_input_object()?
                .fields()
                .get(field_name),
        }
    }

    pub(crate) fn enum_value<'s>(&self, schema: &'s Schema) -> Option<&'s EnumValue> {
        let Self::EnumValue {
            type_name,
            value_name,
        } = self
        else {
            return None;
        };
        schema.get_type(type_name)?.as_enum()?.get_value(value_name)
    }

    pub(crate) fn directive<'s>(&self, schema: &'s Schema) -> Option<&'s Directive> {
        let Self::Directive(name) = self else {
            return None;
        };
        schema.get_directive(name).map(AsRef::as_ref)
    }
}

#[cfg(test)]
mod tests;

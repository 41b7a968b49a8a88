mod directive;
mod enum_type;
mod field;
mod input_object_type;
mod named_type;
mod object_type;
mod resolvers;
mod scalar_type;
mod specified_scalars;
mod thunk;
mod type_kind;
mod type_ref;
mod union_type;

pub use directive::deprecated_directive;
pub use directive::include_directive;
pub use directive::is_specified_directive;
pub use directive::skip_directive;
pub use directive::specified_by_directive;
pub use directive::specified_directives;
pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Argument;
pub use field::Field;
pub use field::FieldMap;
pub use field::InputField;
pub use field::InputValue;
pub use field::InputValueMap;
pub use field::DEFAULT_DEPRECATION_REASON;
pub use input_object_type::InputObjectType;
pub use named_type::NamedType;
pub use object_type::InterfaceType;
pub use object_type::ObjectType;
pub use resolvers::ArgumentValues;
pub use resolvers::FieldFn;
pub use resolvers::FieldResolver;
pub use resolvers::IsTypeOfFn;
pub use resolvers::OutTypeFn;
pub use resolvers::ParseLiteralFn;
pub use resolvers::Resolved;
pub use resolvers::ScalarFn;
pub use resolvers::TypeResolver;
pub use scalar_type::ScalarType;
pub use specified_scalars::boolean_scalar;
pub use specified_scalars::float_scalar;
pub use specified_scalars::id_scalar;
pub use specified_scalars::int_scalar;
pub use specified_scalars::is_specified_scalar_type;
pub use specified_scalars::specified_scalar;
pub use specified_scalars::string_scalar;
pub use specified_scalars::GRAPHQL_MAX_INT;
pub use specified_scalars::GRAPHQL_MIN_INT;
pub use specified_scalars::SPECIFIED_SCALAR_NAMES;
pub use thunk::Thunk;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;

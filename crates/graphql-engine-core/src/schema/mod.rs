#[allow(clippy::module_inception)]
mod schema;
mod schema_config;
mod directive_validator;
mod enum_type_validator;
mod input_object_type_validator;
mod object_or_interface_type_validator;
mod union_type_validator;
mod validate;

pub use schema::Implementations;
pub use schema::Schema;
pub use schema_config::SchemaConfig;
pub use validate::assert_valid_schema;
pub use validate::validate_schema;

#[cfg(test)]
mod tests;

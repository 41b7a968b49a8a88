//! Schema and value utilities: type comparison, literal and input value
//! coercion, SDL schema building and extension, schema printing, the
//! introspection query and client schemas built from its results, and the
//! [`TypeInfo`] tracker used by document traversals.

mod ast_from_value;
mod build_ast_schema;
mod build_client_schema;
mod coerce_input_value;
mod extend_schema;
mod inspect;
mod introspection_query;
mod print_schema;
mod suggestion_list;
mod type_comparators;
mod type_info;
mod value_from_ast;

pub use ast_from_value::ast_from_value;
pub use build_ast_schema::build_ast_schema;
pub use build_ast_schema::build_schema;
pub use build_ast_schema::BuildSchemaOptions;
pub use build_client_schema::build_client_schema;
pub use coerce_input_value::coerce_input_value;
pub use coerce_input_value::coerce_input_value_with;
pub use coerce_input_value::CoercionError;
pub use extend_schema::extend_schema;
pub use inspect::inspect;
pub use introspection_query::get_introspection_query;
pub use introspection_query::introspection_from_schema;
pub use introspection_query::IntrospectionOptions;
pub use print_schema::print_directive;
pub use print_schema::print_introspection_schema;
pub use print_schema::print_schema;
pub use print_schema::print_type;
pub use suggestion_list::did_you_mean;
pub(crate) use suggestion_list::natural_cmp;
pub use suggestion_list::suggestion_list;
pub use type_comparators::do_types_overlap;
pub use type_comparators::is_equal_type;
pub use type_comparators::is_type_sub_type_of;
pub use type_comparators::type_from_ast;
pub use type_info::TypeInfo;
pub use value_from_ast::value_from_ast;
pub use value_from_ast::value_from_ast_untyped;

#[cfg(test)]
mod tests;

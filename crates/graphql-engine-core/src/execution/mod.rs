//! Executing operations against a [`Schema`](crate::schema::Schema).
//!
//! Execution is synchronous until a resolver returns a pending value: a
//! request whose resolvers all answer immediately completes inside
//! [`execute`] and [`execute_sync`] without an async runtime. Queries let
//! pending resolvers run concurrently; mutations resolve their root fields
//! one at a time, in document order.

mod collect_fields;
mod execute;
mod field_value;
mod middleware;
mod path;
mod resolve_info;
mod subscribe;
mod values;

pub use collect_fields::collect_fields;
pub use collect_fields::collect_subfields;
pub use collect_fields::FieldGroups;
pub use execute::default_field_resolver;
pub use execute::default_type_resolver;
pub use execute::execute;
pub use execute::execute_sync;
pub use execute::ExecutionArgs;
pub use execute::ExecutionResult;
pub use field_value::FieldValue;
pub use field_value::ValueStream;
pub use middleware::Middleware;
pub use path::Path;
pub use resolve_info::ResolveInfo;
pub use subscribe::create_source_event_stream;
pub use subscribe::subscribe;
pub use subscribe::SubscriptionStream;
pub use values::get_argument_values;
pub use values::get_directive_values;
pub use values::get_variable_values;
pub use values::MAX_VARIABLE_ERRORS;

#[cfg(test)]
mod tests;

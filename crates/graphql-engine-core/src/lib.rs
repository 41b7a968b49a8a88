//! The runtime half of a GraphQL engine: the type system and schema model,
//! introspection, schema utilities (SDL building, extension, printing and
//! introspection round trips), the document validator and the executor.
//!
//! ```rust
//! use graphql_engine_core::execute_sync;
//! use graphql_engine_core::execution::ExecutionArgs;
//! use graphql_engine_core::utilities::build_schema;
//! use graphql_engine_parser::parse;
//! use serde_json::json;
//!
//! let schema = build_schema("type Query { hello: String }").unwrap();
//! let document = parse("{ hello }").unwrap();
//! let result = execute_sync(
//!     ExecutionArgs::new(&schema, &document).root_value(json!({"hello": "world"})),
//! )
//! .unwrap();
//! assert_eq!(result.data, Some(json!({"hello": "world"})));
//! ```

mod error;
pub mod execution;
pub mod introspection;
mod maybe_async;
pub mod schema;
pub mod types;
pub mod utilities;
pub mod validation;

pub use error::located_error;
pub use error::FieldError;
pub use error::SchemaBuildError;
pub use execution::execute;
pub use execution::execute_sync;
pub use execution::subscribe;
pub use maybe_async::MaybeAsync;
pub use schema::Schema;
pub use validation::validate;

/// Runtime values: variables, coerced arguments, scalar results and
/// response data.
pub type Value = serde_json::Value;

/// Result alias for schema construction.
pub type Result<T> = std::result::Result<T, SchemaBuildError>;

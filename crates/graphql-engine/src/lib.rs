//! A GraphQL engine: the language (sources, lexing, parsing, printing and
//! visiting documents) and the runtime (schemas, validation, introspection
//! and execution) behind one crate.
//!
//! ```rust
//! use graphql_engine::execution::ExecutionArgs;
//! use graphql_engine::utilities::build_schema;
//! use serde_json::json;
//!
//! let schema = build_schema("type Query { greeting: String }").unwrap();
//! let document = graphql_engine::parse("{ greeting }").unwrap();
//! assert!(graphql_engine::validate(&schema, &document, Default::default()).is_empty());
//!
//! let result = graphql_engine::execute_sync(
//!     ExecutionArgs::new(&schema, &document).root_value(json!({"greeting": "hi"})),
//! )
//! .unwrap();
//! assert_eq!(result.data, Some(json!({"greeting": "hi"})));
//! ```

pub use graphql_engine_core::*;

/// The language half: sources, diagnostics, the lexer and parser, the
/// printer and the document visitor.
pub mod language {
    pub use graphql_engine_parser::*;
}

pub use graphql_engine_parser::ast;
pub use graphql_engine_parser::parse;
pub use graphql_engine_parser::parse_const_value;
pub use graphql_engine_parser::parse_type;
pub use graphql_engine_parser::parse_value;
pub use graphql_engine_parser::print_ast;
pub use graphql_engine_parser::GraphQLError;
pub use graphql_engine_parser::Source;

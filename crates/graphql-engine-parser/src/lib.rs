//! Language-level building blocks for a GraphQL engine: source text and
//! location tracking, a structured error type shared by every layer, the
//! lexer and recursive-descent parser, the AST printer and a generic AST
//! visitor.
//!
//! ```rust
//! use graphql_engine_parser::parse;
//! use graphql_engine_parser::print_ast;
//!
//! let document = parse("{ hero { name } }").unwrap();
//! assert_eq!(print_ast(&document), "{\n  hero {\n    name\n  }\n}");
//! ```

pub mod ast;
mod block_string;
mod graphql_error;
mod lexer;
mod parser;
mod print_location;
mod printer;
mod source;
pub mod token;
pub mod visitor;

pub use block_string::dedent_block_string_lines;
pub use block_string::is_printable_as_block_string;
pub use block_string::print_block_string;
pub use graphql_error::FormattedError;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use lexer::Lexer;
pub use parser::parse;
pub use parser::parse_const_value;
pub use parser::parse_type;
pub use parser::parse_value;
pub use parser::parse_with_options;
pub use parser::ParseOptions;
pub use parser::Parser;
pub use print_location::print_location;
pub use print_location::print_source_location;
pub use printer::print_ast;
pub use printer::print_string;
pub use source::Source;
pub use source::SourceLocation;
pub use visitor::edit_document;
pub use visitor::visit;
pub use visitor::Visitor;
pub use visitor::VisitorAction;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, GraphQLError>;

#[cfg(test)]
mod tests;

use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::NamedType;
use crate::FieldError;
use crate::MaybeAsync;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::GraphQLError;
use serde_json::Map;
use std::sync::Arc;

/// Coerced argument values keyed by argument name (or `out_name`).
pub type ArgumentValues = Map<String, Value>;

/// What a resolver produces: a value now, or a future of one.
pub type Resolved = MaybeAsync<'static, Result<FieldValue, FieldError>>;

/// Resolves one field given its parent value.
pub type FieldResolver =
    Arc<dyn Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved + Send + Sync>;

/// A callable stored inside a source value. The default resolver calls it
/// with the field's info and arguments.
pub type FieldFn = Arc<dyn Fn(&ResolveInfo<'_>, &ArgumentValues) -> Resolved + Send + Sync>;

/// Decides which object type an abstract-typed value belongs to. Yields
/// the object type's name.
pub type TypeResolver = Arc<
    dyn Fn(&FieldValue, &ResolveInfo<'_>, &NamedType) -> MaybeAsync<'static, Option<String>>
        + Send
        + Sync,
>;

/// Checks whether a value belongs to an object type.
pub type IsTypeOfFn =
    Arc<dyn Fn(&FieldValue, &ResolveInfo<'_>) -> MaybeAsync<'static, bool> + Send + Sync>;

/// Serializes an internal value, or parses an external input value.
pub type ScalarFn = Arc<dyn Fn(&Value) -> Result<Value, GraphQLError> + Send + Sync>;

/// Parses a value literal, with access to the request's variables.
pub type ParseLiteralFn =
    Arc<dyn Fn(&ast::Value, Option<&Map<String, Value>>) -> Result<Value, GraphQLError> + Send + Sync>;

/// Transforms a coerced input object before it reaches resolvers.
pub type OutTypeFn = Arc<dyn Fn(Map<String, Value>) -> Value + Send + Sync>;

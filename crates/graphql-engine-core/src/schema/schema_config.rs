use crate::types::Directive;
use crate::types::NamedType;
use crate::types::ObjectType;
use graphql_engine_parser::ast;
use std::sync::Arc;

/// Everything needed to build a [`Schema`](crate::Schema).
///
/// Root operation types are usually object types; any named type is
/// accepted so that [`validate_schema`](crate::schema::validate_schema)
/// can report a misconfigured root instead of construction failing.
/// `directives` of `None` means the four specified directives.
#[derive(Clone, Debug, Default)]
pub struct SchemaConfig {
    pub description: Option<String>,
    pub query: Option<NamedType>,
    pub mutation: Option<NamedType>,
    pub subscription: Option<NamedType>,
    pub types: Vec<NamedType>,
    pub directives: Option<Vec<Arc<Directive>>>,
    pub ast_node: Option<ast::SchemaDefinition>,
    pub extension_ast_nodes: Vec<ast::SchemaExtension>,
    pub assume_valid: bool,
}

impl SchemaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn query(mut self, query: impl Into<Arc<ObjectType>>) -> Self {
        self.query = Some(NamedType::Object(query.into()));
        self
    }

    pub fn mutation(mut self, mutation: impl Into<Arc<ObjectType>>) -> Self {
        self.mutation = Some(NamedType::Object(mutation.into()));
        self
    }

    pub fn subscription(mut self, subscription: impl Into<Arc<ObjectType>>) -> Self {
        self.subscription = Some(NamedType::Object(subscription.into()));
        self
    }

    /// Adds a type that is not reachable from the roots, or fixes the
    /// position of one that is. Explicit types come first in the type map.
    pub fn add_type(mut self, ty: impl Into<NamedType>) -> Self {
        self.types.push(ty.into());
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = NamedType>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn directives(mut self, directives: impl IntoIterator<Item = Arc<Directive>>) -> Self {
        self.directives = Some(directives.into_iter().collect());
        self
    }

    /// Skips [`validate_schema`](crate::schema::validate_schema) for the
    /// built schema.
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }
}

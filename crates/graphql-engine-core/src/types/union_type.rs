use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::NamedType;
use crate::types::Thunk;
use crate::types::TypeResolver;
use crate::MaybeAsync;
use graphql_engine_parser::ast;
use std::fmt;
use std::sync::Arc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
///
/// Members are referenced by name, in declaration order.
#[derive(Clone)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    types: Thunk<Vec<String>>,
    pub resolve_type: Option<TypeResolver>,
    pub ast_node: Option<ast::UnionTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::UnionTypeExtension>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: Thunk::default(),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.types.get_mut().push(name.into());
        self
    }

    pub fn members_thunk(mut self, types: impl Fn() -> Vec<String> + Send + Sync + 'static) -> Self {
        self.types = Thunk::lazy(types);
        self
    }

    pub fn with_resolve_type(
        mut self,
        resolve_type: impl Fn(&FieldValue, &ResolveInfo<'_>, &NamedType) -> MaybeAsync<'static, Option<String>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn types(&self) -> &[String] {
        self.types.get()
    }
}

impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}

use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::FieldMap;
use crate::types::IsTypeOfFn;
use crate::types::NamedType;
use crate::types::Thunk;
use crate::types::TypeResolver;
use crate::MaybeAsync;
use graphql_engine_parser::ast;
use std::fmt;
use std::sync::Arc;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
///
/// Interfaces are referenced by name. Both the field map and the interface
/// list may be supplied lazily, see [`Thunk`].
#[derive(Clone)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    fields: Thunk<FieldMap>,
    interfaces: Thunk<Vec<String>>,
    pub is_type_of: Option<IsTypeOfFn>,
    pub ast_node: Option<ast::ObjectTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::ObjectTypeExtension>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Thunk::default(),
            interfaces: Thunk::default(),
            is_type_of: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field. Forces a lazily supplied field map.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.get_mut().insert(field.name.clone(), field);
        self
    }

    pub fn fields_thunk(mut self, fields: impl Fn() -> FieldMap + Send + Sync + 'static) -> Self {
        self.fields = Thunk::lazy(fields);
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.get_mut().push(name.into());
        self
    }

    pub fn interfaces_thunk(
        mut self,
        interfaces: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.interfaces = Thunk::lazy(interfaces);
        self
    }

    pub fn with_is_type_of(
        mut self,
        is_type_of: impl Fn(&FieldValue, &ResolveInfo<'_>) -> MaybeAsync<'static, bool>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }

    pub fn fields(&self) -> &FieldMap {
        self.fields.get()
    }

    pub fn interfaces(&self) -> &[String] {
        self.interfaces.get()
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("interfaces", &self.interfaces)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    fields: Thunk<FieldMap>,
    interfaces: Thunk<Vec<String>>,
    pub resolve_type: Option<TypeResolver>,
    pub ast_node: Option<ast::InterfaceTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::InterfaceTypeExtension>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Thunk::default(),
            interfaces: Thunk::default(),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.get_mut().insert(field.name.clone(), field);
        self
    }

    pub fn fields_thunk(mut self, fields: impl Fn() -> FieldMap + Send + Sync + 'static) -> Self {
        self.fields = Thunk::lazy(fields);
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.get_mut().push(name.into());
        self
    }

    pub fn interfaces_thunk(
        mut self,
        interfaces: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.interfaces = Thunk::lazy(interfaces);
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

    pub fn fields(&self) -> &FieldMap {
        self.fields.get()
    }

    pub fn interfaces(&self) -> &[String] {
        self.interfaces.get()
    }
}

impl fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.name)
            .field("interfaces", &self.interfaces)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

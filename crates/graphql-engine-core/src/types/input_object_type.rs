use crate::types::InputValue;
use crate::types::InputValueMap;
use crate::types::OutTypeFn;
use crate::types::Thunk;
use crate::Value;
use graphql_engine_parser::ast;
use serde_json::Map;
use std::fmt;
use std::sync::Arc;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    fields: Thunk<InputValueMap>,
    pub out_type: Option<OutTypeFn>,
    pub ast_node: Option<ast::InputObjectTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::InputObjectTypeExtension>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Thunk::default(),
            out_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.get_mut().insert(field.name.clone(), field);
        self
    }

    pub fn fields_thunk(
        mut self,
        fields: impl Fn() -> InputValueMap + Send + Sync + 'static,
    ) -> Self {
        self.fields = Thunk::lazy(fields);
        self
    }

    /// Transforms every coerced value of this type, e.g. into a tagged
    /// representation the resolvers expect.
    pub fn with_out_type(
        mut self,
        out_type: impl Fn(Map<String, Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.out_type = Some(Arc::new(out_type));
        self
    }

    pub fn fields(&self) -> &InputValueMap {
        self.fields.get()
    }

    pub(crate) fn finish(&self, coerced: Map<String, Value>) -> Value {
        match &self.out_type {
            Some(out_type) => out_type(coerced),
            None => Value::Object(coerced),
        }
    }
}

impl fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

use crate::types::ParseLiteralFn;
use crate::types::ScalarFn;
use crate::utilities::value_from_ast_untyped;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use serde_json::Map;
use std::fmt;
use std::sync::Arc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// `serialize` turns an internal value into a response value,
/// `parse_value` coerces a variable value and `parse_literal` coerces a
/// value literal. Custom scalars that omit them pass values through
/// unchanged; omitting `parse_literal` parses the literal as plain JSON and
/// hands it to `parse_value`.
#[derive(Clone)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub specified_by_url: Option<String>,
    serialize: Option<ScalarFn>,
    parse_value: Option<ScalarFn>,
    parse_literal: Option<ParseLiteralFn>,
    pub ast_node: Option<ast::ScalarTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::ScalarTypeExtension>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn with_serialize(
        mut self,
        serialize: impl Fn(&Value) -> Result<Value, GraphQLError> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    pub fn with_parse_value(
        mut self,
        parse_value: impl Fn(&Value) -> Result<Value, GraphQLError> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }

    pub fn with_parse_literal(
        mut self,
        parse_literal: impl Fn(&ast::Value, Option<&Map<String, Value>>) -> Result<Value, GraphQLError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, GraphQLError> {
        match &self.serialize {
            Some(serialize) => serialize(value),
            None => Ok(value.clone()),
        }
    }

    pub fn parse_value(&self, value: &Value) -> Result<Value, GraphQLError> {
        match &self.parse_value {
            Some(parse_value) => parse_value(value),
            None => Ok(value.clone()),
        }
    }

    pub fn parse_literal(
        &self,
        node: &ast::Value,
        variables: Option<&Map<String, Value>>,
    ) -> Result<Value, GraphQLError> {
        if let Some(parse_literal) = &self.parse_literal {
            return parse_literal(node, variables);
        }
        match value_from_ast_untyped(node, variables) {
            Some(value) => self.parse_value(&value),
            None => Err(GraphQLError::new(format!(
                "Expected value of type '{}', found {}.",
                self.name,
                print_ast(node),
            ))),
        }
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("specified_by_url", &self.specified_by_url)
            .finish_non_exhaustive()
    }
}

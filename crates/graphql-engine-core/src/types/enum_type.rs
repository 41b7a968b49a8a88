use crate::utilities::did_you_mean;
use crate::utilities::inspect;
use crate::utilities::suggestion_list;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
///
/// Each value has a name (what clients see) and an internal value (what
/// resolvers see). The internal value defaults to the name.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValue>,
    pub ast_node: Option<ast::EnumTypeDefinition>,
    pub extension_ast_nodes: Vec<ast::EnumTypeExtension>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub value: Value,
    pub deprecation_reason: Option<String>,
    pub ast_node: Option<ast::EnumValueDefinition>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The internal value resolvers produce and receive for this value.
    pub fn internal_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name.clone(), value);
        self
    }

    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Maps an internal value to the name of the enum value holding it.
    pub fn serialize(&self, output: &Value) -> Result<Value, GraphQLError> {
        self.values
            .values()
            .find(|value| &value.value == output)
            .map(|value| Value::String(value.name.clone()))
            .ok_or_else(|| {
                GraphQLError::new(format!(
                    "Enum '{}' cannot represent value: {}",
                    self.name,
                    inspect(output),
                ))
            })
    }

    pub fn parse_value(&self, input: &Value) -> Result<Value, GraphQLError> {
        let Value::String(name) = input else {
            return Err(GraphQLError::new(format!(
                "Enum '{}' cannot represent non-string value: {}.{}",
                self.name,
                inspect(input),
                self.did_you_mean_value(&inspect(input)),
            )));
        };
        match self.values.get(name) {
            Some(value) => Ok(value.value.clone()),
            None => Err(GraphQLError::new(format!(
                "Value '{name}' does not exist in '{}' enum.{}",
                self.name,
                self.did_you_mean_value(name),
            ))),
        }
    }

    pub fn parse_literal(&self, node: &ast::Value) -> Result<Value, GraphQLError> {
        let ast::Value::Enum(enum_value) = node else {
            let printed = print_ast(node);
            return Err(GraphQLError::new(format!(
                "Enum '{}' cannot represent non-enum value: {printed}.{}",
                self.name,
                self.did_you_mean_value(&printed),
            ))
            .with_node(node.loc()));
        };
        match self.values.get(&enum_value.value) {
            Some(value) => Ok(value.value.clone()),
            None => Err(GraphQLError::new(format!(
                "Value '{}' does not exist in '{}' enum.{}",
                enum_value.value,
                self.name,
                self.did_you_mean_value(&enum_value.value),
            ))
            .with_node(node.loc())),
        }
    }

    fn did_you_mean_value(&self, unknown: &str) -> String {
        let suggestions = suggestion_list(unknown, self.values.keys().map(String::as_str));
        did_you_mean(&suggestions, Some("the enum value"))
    }
}

use crate::execution::execute_sync;
use crate::execution::ExecutionArgs;
use crate::schema::Schema;
use crate::Value;
use graphql_engine_parser::parse;
use graphql_engine_parser::GraphQLError;

/// Which optional parts of the schema the introspection query asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntrospectionOptions {
    /// Descriptions of types, fields, arguments, enum values and
    /// directives.
    pub descriptions: bool,
    /// `specifiedByURL` of scalars.
    pub specified_by_url: bool,
    /// `isRepeatable` of directives.
    pub directive_is_repeatable: bool,
    /// The schema's own description.
    pub schema_description: bool,
    /// Deprecated arguments and input fields, with their deprecation
    /// status.
    pub input_value_deprecation: bool,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        Self {
            descriptions: true,
            specified_by_url: false,
            directive_is_repeatable: false,
            schema_description: false,
            input_value_deprecation: false,
        }
    }
}

impl IntrospectionOptions {
    /// Everything the introspection types can report.
    pub fn full() -> Self {
        Self {
            descriptions: true,
            specified_by_url: true,
            directive_is_repeatable: true,
            schema_description: true,
            input_value_deprecation: true,
        }
    }
}

/// The query clients send to learn a schema. Its response is what
/// [`build_client_schema`](crate::utilities::build_client_schema) reads.
pub fn get_introspection_query(options: IntrospectionOptions) -> String {
    let when = |enabled: bool, text: &'static str| if enabled { text } else { "" };
    let description = when(options.descriptions, "description");
    let specified_by_url = when(options.specified_by_url, "specifiedByURL");
    let directive_is_repeatable = when(options.directive_is_repeatable, "isRepeatable");
    let schema_description = when(options.schema_description, description);
    let include_deprecated = when(options.input_value_deprecation, "(includeDeprecated: true)");
    let is_deprecated = when(options.input_value_deprecation, "isDeprecated");
    let deprecation_reason = when(options.input_value_deprecation, "deprecationReason");

    let query = format!(
        r#"query IntrospectionQuery {{
  __schema {{
    {schema_description}
    queryType {{ name }}
    mutationType {{ name }}
    subscriptionType {{ name }}
    types {{
      ...FullType
    }}
    directives {{
      name
      {description}
      {directive_is_repeatable}
      locations
      args{include_deprecated} {{
        ...InputValue
      }}
    }}
  }}
}}

fragment FullType on __Type {{
  kind
  name
  {description}
  {specified_by_url}
  fields(includeDeprecated: true) {{
    name
    {description}
    args{include_deprecated} {{
      ...InputValue
    }}
    type {{
      ...TypeRef
    }}
    isDeprecated
    deprecationReason
  }}
  inputFields{include_deprecated} {{
    ...InputValue
  }}
  interfaces {{
    ...TypeRef
  }}
  enumValues(includeDeprecated: true) {{
    name
    {description}
    isDeprecated
    deprecationReason
  }}
  possibleTypes {{
    ...TypeRef
  }}
}}

fragment InputValue on __InputValue {{
  name
  {description}
  type {{ ...TypeRef }}
  defaultValue
  {is_deprecated}
  {deprecation_reason}
}}

fragment TypeRef on __Type {{
  kind
  name
  ofType {{
    kind
    name
    ofType {{
      kind
      name
      ofType {{
        kind
        name
        ofType {{
          kind
          name
          ofType {{
            kind
            name
            ofType {{
              kind
              name
              ofType {{
                kind
                name
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}
"#
    );
    // Disabled options leave blank lines behind.
    query
        .lines()
        .filter(|line| !line.trim().is_empty() || line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the introspection query against `schema` and returns the `data`
/// of the response.
pub fn introspection_from_schema(
    schema: &Schema,
    options: IntrospectionOptions,
) -> Result<Value, GraphQLError> {
    let document = parse(get_introspection_query(options).as_str())?;
    let result = execute_sync(ExecutionArgs::new(schema, &document))?;
    if let Some(error) = result.errors.into_iter().next() {
        return Err(error);
    }
    result
        .data
        .ok_or_else(|| GraphQLError::new("Introspection did not return a result."))
}

use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::specified_directives;
use crate::utilities::extend_schema::extend_schema_config;
use crate::validation::validate_sdl;
use crate::SchemaBuildError;
use graphql_engine_parser::ast;
use graphql_engine_parser::parse;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Options for building a schema from SDL.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuildSchemaOptions {
    /// Marks the built schema as valid, skipping schema validation.
    pub assume_valid: bool,
    /// Skips validating the SDL document itself.
    pub assume_valid_sdl: bool,
}

/// Builds a schema from a type-system document.
///
/// Root operation types come from the `schema` definition, or else from
/// types named `Query`, `Mutation` and `Subscription`. The specified
/// directives are added unless the document redefines them. The built
/// schema has no resolvers: fields use the default resolver and abstract
/// types the default type resolver.
pub fn build_ast_schema(document: &ast::Document, options: BuildSchemaOptions) -> Result<Schema> {
    if !(options.assume_valid || options.assume_valid_sdl) {
        let errors = validate_sdl(document, None);
        if !errors.is_empty() {
            return Err(SchemaBuildError::InvalidSdl { errors });
        }
    }

    let mut config = extend_schema_config(SchemaConfig::default(), document, options.assume_valid)?;

    if config.ast_node.is_none() {
        let root = |name: &str| {
            config
                .types
                .iter()
                .find(|ty| ty.name() == name)
                .cloned()
        };
        let (query, mutation, subscription) =
            (root("Query"), root("Mutation"), root("Subscription"));
        config.query = query;
        config.mutation = mutation;
        config.subscription = subscription;
    }

    let mut directives = config.directives.take().unwrap_or_default();
    for specified in specified_directives() {
        if !directives
            .iter()
            .any(|directive| directive.name == specified.name)
        {
            directives.push(specified);
        }
    }
    config.directives = Some(directives);

    Schema::new(config)
}

/// Parses `source` and builds a schema from it.
///
/// ```rust
/// # use graphql_engine_core::utilities::build_schema;
/// let schema = build_schema("type Query { answer: Int }").unwrap();
/// assert!(schema.query_type().is_some());
/// ```
pub fn build_schema(source: &str) -> Result<Schema> {
    let document = parse(source)?;
    build_ast_schema(&document, BuildSchemaOptions::default())
}

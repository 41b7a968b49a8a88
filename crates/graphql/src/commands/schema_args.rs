use crate::commands::graphql_files;
use crate::commands::graphql_files::DEFAULT_GRAPHQL_FILE_EXTS;
use crate::output_utils;
use anyhow::Context;
use graphql_engine::ast;
use graphql_engine::schema::validate_schema;
use graphql_engine::utilities::build_ast_schema;
use graphql_engine::utilities::BuildSchemaOptions;
use graphql_engine::Schema;
use graphql_engine::SchemaBuildError;
use std::path::PathBuf;

/// Arguments shared by every command that needs a schema.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=DEFAULT_GRAPHQL_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files, or directories containing SDL \
             files, which together define the schema.",
        long="schema",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct LoadedSchema {
    pub schema: Schema,
    pub num_files: usize,
    pub num_skipped_files: usize,
    pub num_type_definitions: usize,
    pub num_directive_definitions: usize,
}

impl SchemaArgs {
    /// Parses every schema file, builds one schema from all of their type
    /// system definitions and checks that it is valid.
    pub(crate) fn load(&self) -> anyhow::Result<LoadedSchema> {
        let found = graphql_files::find_graphql_files(
            &self.schema_paths,
            &self.graphql_file_exts,
        )?;
        if found.paths.is_empty() {
            anyhow::bail!("No schema files found at {:#?}.", self.schema_paths);
        }

        let mut definitions = vec![];
        for path in &found.paths {
            let document = graphql_files::parse_file(path)?;
            let (type_system, executable): (Vec<_>, Vec<_>) = document
                .definitions
                .into_iter()
                .partition(|definition| !definition.is_executable());
            if !executable.is_empty() {
                log::warn!(
                    "Ignoring {} operation and fragment definitions found in \
                    schema file {path:#?}.",
                    executable.len(),
                );
            }
            definitions.extend(type_system);
        }

        let num_type_definitions = definitions
            .iter()
            .filter(|definition| matches!(definition, ast::Definition::Type(_)))
            .count();
        let num_directive_definitions = definitions
            .iter()
            .filter(|definition| matches!(definition, ast::Definition::Directive(_)))
            .count();
        let document = ast::Document {
            definitions,
            loc: None,
        };

        let schema = build_ast_schema(&document, BuildSchemaOptions::default())
            .map_err(|error| match error {
                SchemaBuildError::InvalidSdl { errors } => {
                    anyhow::anyhow!("{}", output_utils::format_errors(&errors))
                },
                other => anyhow::Error::new(other),
            })
            .context("Failed to build the schema.")?;

        let schema_errors = validate_schema(&schema);
        if !schema_errors.is_empty() {
            anyhow::bail!(
                "The schema is invalid:\n\n{}",
                output_utils::format_errors(schema_errors),
            );
        }
        log::debug!(
            "Built a schema of {} types from {} files.",
            schema.type_map().len(),
            found.paths.len(),
        );

        Ok(LoadedSchema {
            schema,
            num_files: found.paths.len(),
            num_skipped_files: found.num_skipped,
            num_type_definitions,
            num_directive_definitions,
        })
    }
}

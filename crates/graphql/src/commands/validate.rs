use crate::commands::graphql_files;
use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_engine::validation::ValidationOptions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL operations which need to be validated against the \
             schema.",
        long="operations",
    )]
    operation_paths: Vec<PathBuf>,
}

impl ValidateCmd {
    fn validate(&self) -> anyhow::Result<CommandResult> {
        let loaded = self.schema.load()?;

        let found = if self.operation_paths.is_empty() {
            graphql_files::FoundFiles::default()
        } else {
            graphql_files::find_graphql_files(
                &self.operation_paths,
                &self.schema.graphql_file_exts,
            )?
        };

        let mut num_operations = 0;
        let mut failures = vec![];
        for path in &found.paths {
            let document = graphql_files::parse_file(path)?;
            num_operations += document.operations().count();
            let errors = graphql_engine::validate(
                &loaded.schema,
                &document,
                ValidationOptions::default(),
            );
            log::debug!("Validated {path:#?}: {} errors.", errors.len());
            if !errors.is_empty() {
                failures.push(format!(
                    "{path:#?}:\n\n{}",
                    output_utils::format_errors(&errors),
                ));
            }
        }

        if !failures.is_empty() {
            return Ok(CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n\n{}",
                output_utils::RED_X,
                failures.join("\n\n"),
            )));
        }

        Ok(CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            loaded.num_files + found.paths.len(),
            loaded.num_skipped_files + found.num_skipped,
            loaded.num_type_definitions,
            loaded.num_directive_definitions,
            num_operations,
        )))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub fn name(&self) -> &'static str {
        "validate"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.validate().unwrap_or_else(CommandResult::from_error)
    }
}

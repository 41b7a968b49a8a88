use crate::commands::graphql_files;
use crate::commands::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_engine::execution::ExecutionArgs;
use graphql_engine::execution::ExecutionResult;
use graphql_engine::validation::ValidationOptions;
use graphql_engine::Value;
use serde_json::Map;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Path to the GraphQL document holding the operation to execute.",
        long,
    )]
    query: PathBuf,

    #[arg(
        help="Name of the operation to execute, when the document holds \
             more than one.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Variable values, as a JSON object.",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="The root value resolvers start from, as JSON. Fields resolve \
             by name from it.",
        default_value="{}",
        long,
    )]
    root_value: String,
}

impl ExecuteCmd {
    async fn execute(&self) -> anyhow::Result<CommandResult> {
        let loaded = self.schema.load()?;
        let document = graphql_files::parse_file(&self.query)?;
        let variables = match &self.variables {
            Some(json) => serde_json::from_str::<Map<String, Value>>(json)
                .context("--variables must be a JSON object.")?,
            None => Map::new(),
        };
        let root_value = serde_json::from_str::<Value>(&self.root_value)
            .context("--root-value must be valid JSON.")?;

        let errors = graphql_engine::validate(
            &loaded.schema,
            &document,
            ValidationOptions::default(),
        );
        let result = if errors.is_empty() {
            let mut args = ExecutionArgs::new(&loaded.schema, &document)
                .root_value(root_value)
                .variable_values(variables);
            if let Some(operation_name) = &self.operation_name {
                args = args.operation_name(operation_name.as_str());
            }
            graphql_engine::execute(args).await
        } else {
            log::debug!("Not executing: {} validation errors.", errors.len());
            ExecutionResult::from_errors(errors)
        };

        let response = serde_json::to_string_pretty(&result.to_value())?;
        if result.errors.is_empty() {
            Ok(CommandResult::stdout(format_args!("{response}")))
        } else {
            Ok(CommandResult::failed_stdout(format_args!("{response}")))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub fn name(&self) -> &'static str {
        "execute"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.execute().await.unwrap_or_else(CommandResult::from_error)
    }
}

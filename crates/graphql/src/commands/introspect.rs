use crate::commands::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_engine::utilities::introspection_from_schema;
use graphql_engine::utilities::IntrospectionOptions;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Leave out descriptions.",
        long,
    )]
    no_descriptions: bool,
}

impl IntrospectCmd {
    fn introspect(&self) -> anyhow::Result<CommandResult> {
        let loaded = self.schema.load()?;
        let options = IntrospectionOptions {
            descriptions: !self.no_descriptions,
            ..IntrospectionOptions::full()
        };
        let data = introspection_from_schema(&loaded.schema, options)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        Ok(CommandResult::stdout(format_args!(
            "{}",
            serde_json::to_string_pretty(&data)?,
        )))
    }
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub fn name(&self) -> &'static str {
        "introspect"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.introspect().unwrap_or_else(CommandResult::from_error)
    }
}

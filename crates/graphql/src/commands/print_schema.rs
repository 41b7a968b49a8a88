use crate::commands::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_engine::utilities::print_introspection_schema;
use graphql_engine::utilities::print_schema;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintSchemaCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Print the built-in directives and introspection types instead \
             of the schema's own definitions.",
        long,
    )]
    introspection_types: bool,
}

#[inherent::inherent]
impl RunnableCommand for PrintSchemaCmd {
    pub fn name(&self) -> &'static str {
        "print-schema"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.schema.load() {
            Ok(loaded) if self.introspection_types => CommandResult::stdout(format_args!(
                "{}",
                print_introspection_schema(&loaded.schema),
            )),
            Ok(loaded) => CommandResult::stdout(format_args!("{}", print_schema(&loaded.schema))),
            Err(e) => CommandResult::from_error(e),
        }
    }
}

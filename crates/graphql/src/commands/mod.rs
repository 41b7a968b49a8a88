mod execute;
mod graphql_files;
mod introspect;
mod print_schema;
mod schema_args;
mod validate;

use crate::Cli;
use crate::CommandResult;
use execute::ExecuteCmd;
use introspect::IntrospectCmd;
use print_schema::PrintSchemaCmd;
use tracing::Instrument;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Execute one operation against a schema, with a JSON root value.
    Execute(Box<ExecuteCmd>),
    /// Print the introspection result of a schema as JSON.
    Introspect(Box<IntrospectCmd>),
    /// Print a schema back out as SDL.
    PrintSchema(Box<PrintSchemaCmd>),
    /// Validate a schema and, optionally, operations against it.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        let span = tracing::info_span!("command", name = self.name());
        async move {
            match self {
                Self::Execute(cmd) => cmd.run(cli).await,
                Self::Introspect(cmd) => cmd.run(cli).await,
                Self::PrintSchema(cmd) => cmd.run(cli).await,
                Self::Validate(cmd) => cmd.run(cli).await,
            }
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Execute(cmd) => cmd.name(),
            Self::Introspect(cmd) => cmd.name(),
            Self::PrintSchema(cmd) => cmd.name(),
            Self::Validate(cmd) => cmd.name(),
        }
    }
}

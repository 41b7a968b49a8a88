use crate::Cli;
use crate::CommandResult;

/// A `graphql` subcommand. It runs inside a tracing span labeled with
/// `name`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// The subcommand as typed on the command line.
    fn name(&self) -> &'static str;

    async fn run(self, cli: Cli) -> CommandResult;
}

mod generate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-testgen")]
pub(crate) enum CommandEnum {
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}

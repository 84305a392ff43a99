use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::Shell;
use std::io;

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to emit a completion script for.
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout().lock());
    Ok(())
}

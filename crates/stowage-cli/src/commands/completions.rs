//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => shells::Shell::Bash,
        Shell::Zsh => shells::Shell::Zsh,
        Shell::Fish => shells::Shell::Fish,
        Shell::PowerShell => shells::Shell::PowerShell,
        Shell::Elvish => shells::Shell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "stowage", &mut std::io::stdout());
    Ok(())
}

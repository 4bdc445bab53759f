//! `windkeep completions <shell>`.
//!
//! Prints a completion script for the whole command tree to stdout, e.g.
//! `windkeep completions zsh > ~/.zfunc/_windkeep`.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    generate(CompletionShell::from(shell), &mut cmd, bin, &mut std::io::stdout());
    Ok(())
}

//! Interactive pickers for commands whose selector was omitted.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use dialoguer::{Confirm, Select};

use crate::error::{Error, Result};

/// Let the user pick one of `items`. `None` if the picker was dismissed.
///
/// # Errors
///
/// Fails without prompting when stdin is not a terminal, so scripts must
/// pass the selector explicitly.
pub fn choose<'a, T: Display>(
    prompt: &str,
    what: &str,
    items: &'a [T],
    current: Option<usize>,
) -> Result<Option<&'a T>> {
    if !io::stdin().is_terminal() {
        return Err(Error::Other(format!(
            "{} required (no terminal for interactive selection)",
            what
        )));
    }

    if items.is_empty() {
        return Err(Error::Other(format!("no {} available", what)));
    }

    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(current.unwrap_or(0))
        .interact_opt()?;

    Ok(selection.map(|i| &items[i]))
}

/// Ask a yes/no question, defaulting to no.
///
/// # Errors
///
/// Fails when stdin is not a terminal; callers offer `--yes` for scripts.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(Error::Other(
            "confirmation required (pass --yes when not running interactively)".to_string(),
        ));
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(Into::into)
}

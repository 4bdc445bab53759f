//! Login command.
//!
//! Validates an API token against the service before storing it.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, Globals};
use crate::core::remote::{Http, Remote};
use crate::error::Result;

/// Authenticate with `token`, prompting for it when omitted.
pub fn execute(globals: &Globals, token: Option<String>) -> Result<()> {
    let mut session = globals.session()?;
    let api_url = session
        .config()
        .api_url(globals.api_url.as_deref())
        .to_string();

    let token = match token {
        Some(token) => Zeroizing::new(token.trim().to_string()),
        None => prompt_token(&api_url)?,
    };

    if token.is_empty() {
        output::warn("no token provided, login cancelled");
        return Ok(());
    }

    let remote = Http::new(&api_url, &token)?;
    let user = remote.current_user()?;
    info!(user = %user.id, "token accepted");

    session.login(&token, globals.api_url.as_deref())?;

    output::success(&format!(
        "logged in as {} ({})",
        output::key(user.display_name()),
        user.email
    ));
    if session.context().organization_id.is_none() {
        output::hint(&format!("run: {}", output::cmd("windkeep org switch")));
    }

    Ok(())
}

/// Read a token from a pipe, or ask for it with hidden input.
fn prompt_token(api_url: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut input)?;
        return Ok(Zeroizing::new(input.trim().to_string()));
    }

    output::hint(&format!("create a token at {}/admin/preferences", api_url));
    let token = Zeroizing::new(
        Password::new()
            .with_prompt("API token")
            .allow_empty_password(true)
            .interact()?,
    );
    Ok(Zeroizing::new(token.trim().to_string()))
}

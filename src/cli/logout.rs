//! Logout command.

use crate::cli::{output, Globals};
use crate::error::Result;

/// Forget the stored token and active context.
pub fn execute(globals: &Globals) -> Result<()> {
    let mut session = globals.session()?;
    session.logout()?;
    output::success("logged out");
    Ok(())
}

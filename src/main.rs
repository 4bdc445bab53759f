//! WindKeep - Secrets for your projects, from the terminal.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use windkeep::cli::output;
use windkeep::cli::{execute, Cli};
use windkeep::core::constants::LOG_ENV;
use windkeep::error::{ContextError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.globals.verbose {
            EnvFilter::new("windkeep=debug")
        } else {
            EnvFilter::new("windkeep=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.globals) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Context(ContextError::NotAuthenticated) => Some("run: windkeep login"),
            Error::Context(ContextError::NoActiveOrganization) => Some("run: windkeep org switch"),
            Error::Context(ContextError::NoActiveProject) => Some("run: windkeep project switch"),
            Error::Context(ContextError::Mismatch { .. }) => Some("run: windkeep org switch"),
            Error::Remote(windkeep::error::RemoteError::Status { status: 401, .. }) => {
                Some("run: windkeep login")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

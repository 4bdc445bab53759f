//! Command-line interface.

pub mod completions;
pub mod config;
pub mod login;
pub mod logout;
pub mod org;
pub mod output;
pub mod pick;
pub mod project;
pub mod pull;
pub mod push;
pub mod run;
pub mod secrets;
pub mod whoami;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::context::Session;
use crate::core::domain::Environment;
use crate::core::remote::Http;
use crate::core::store::Filesystem;
use crate::error::{ContextError, Result};

/// WindKeep - Secrets for your projects, from the terminal.
#[derive(Parser)]
#[command(
    name = "windkeep",
    about = "Manage WindKeep secrets from the terminal",
    version,
    after_help = "Keep it out of the repo. 🌬"
)]
pub struct Cli {
    #[command(flatten)]
    pub globals: Globals,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct Globals {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: ~/.windkeep/config.toml)
    #[arg(long, global = true, env = "WINDKEEP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = "WINDKEEP_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// API token, overriding the stored one
    #[arg(
        long,
        global = true,
        env = "WINDKEEP_TOKEN",
        hide = true,
        hide_env_values = true
    )]
    pub token: Option<String>,
}

impl Globals {
    /// Load the session from the configured store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config cannot be located or read.
    pub fn session(&self) -> Result<Session<Filesystem>> {
        let store = match &self.config {
            Some(path) => Filesystem::new(path),
            None => Filesystem::default_location()?,
        };
        Session::load(store)
    }

    /// Remote client for the session's credentials.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::NotAuthenticated` when no token is available.
    pub fn remote(&self, config: &Config) -> Result<Http> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| config.api_token.as_deref().filter(|t| !t.trim().is_empty()))
            .ok_or(ContextError::NotAuthenticated)?;

        Http::new(config.api_url(self.api_url.as_deref()), token.trim())
    }
}

/// Parse an environment name or alias (dev, staging, prod).
fn parse_environment(value: &str) -> std::result::Result<Environment, String> {
    value.parse::<Environment>().map_err(|e| e.to_string())
}

/// Environment and project selection for sync commands.
#[derive(Args, Debug, Clone, Default)]
pub struct Target {
    /// Environment (dev, staging, prod; default from config, else development)
    #[arg(short, long, value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Project slug or id in the active organization (default: active project)
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Authenticate with an API token
    Login {
        /// API token (prompted with hidden input if omitted)
        token: Option<String>,
    },

    /// Remove stored credentials and context
    Logout,

    /// Show the current user and active context
    Whoami,

    /// Manage organizations
    #[command(alias = "orgs")]
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Manage projects in the active organization
    #[command(alias = "projects")]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage individual secrets of a project
    Secrets {
        #[command(subcommand)]
        action: SecretsAction,
    },

    /// Write an environment's secrets to a local file
    Pull {
        /// Destination file, or - for stdout
        #[arg(default_value = ".env")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Upload secrets from a local file
    Push {
        /// Source file, or - for stdin
        #[arg(default_value = ".env")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        /// Update keys that already exist instead of creating duplicates
        #[arg(long)]
        upsert: bool,
    },

    /// Run a command with secrets injected as env vars
    Run {
        #[command(flatten)]
        target: Target,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// Show or change local settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands.
#[derive(Subcommand)]
pub enum OrgAction {
    /// List your organizations
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select the active organization
    Switch {
        /// Organization id or name (interactive picker if omitted)
        organization: Option<String>,
    },

    /// Rename an organization
    Rename {
        /// New name
        name: String,

        /// Organization id or name (default: active organization)
        #[arg(long)]
        org: Option<String>,
    },
}

/// Project subcommands.
#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects in the active organization
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select the active project
    Switch {
        /// Project slug or id (interactive picker if omitted)
        project: Option<String>,
    },

    /// Create a project and select it
    Create {
        /// Project name (the slug is derived from it)
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Rename a project
    Rename {
        /// New name
        name: String,

        /// Project slug or id (default: active project)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Delete a project and all of its secrets
    Delete {
        /// Project slug or id (default: active project)
        project: Option<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Secret subcommands.
#[derive(Subcommand)]
pub enum SecretsAction {
    /// List secret keys and the environments they are set in
    List {
        /// Only keys with a value in this environment
        #[arg(short, long, value_parser = parse_environment)]
        env: Option<Environment>,

        /// Project slug or id (default: active project)
        #[arg(short, long)]
        project: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a secret value
    Get {
        /// Secret key
        key: String,

        #[command(flatten)]
        target: Target,
    },

    /// Set a secret value, creating the key if needed
    Set {
        /// Secret key (e.g., DATABASE_URL)
        key: String,

        /// Secret value (prompted with hidden input if omitted)
        value: Option<String>,

        /// Description stored with the secret
        #[arg(short, long)]
        description: Option<String>,

        #[command(flatten)]
        target: Target,
    },

    /// Delete a secret from every environment
    Delete {
        /// Secret key
        key: String,

        /// Project slug or id (default: active project)
        #[arg(short, long)]
        project: Option<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the stored configuration (token redacted)
    Show,

    /// Set the environment used when --env is omitted
    SetEnv {
        /// Environment (dev, staging, prod)
        #[arg(value_parser = parse_environment)]
        environment: Environment,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, globals: &Globals) -> Result<()> {
    match command {
        Command::Login { token } => login::execute(globals, token),
        Command::Logout => logout::execute(globals),
        Command::Whoami => whoami::execute(globals),
        Command::Org { action } => match action {
            OrgAction::List { json } => org::list(globals, json),
            OrgAction::Switch { organization } => org::switch(globals, organization.as_deref()),
            OrgAction::Rename { name, org } => org::rename(globals, &name, org.as_deref()),
        },
        Command::Project { action } => match action {
            ProjectAction::List { json } => project::list(globals, json),
            ProjectAction::Switch { project } => project::switch(globals, project.as_deref()),
            ProjectAction::Create { name, description } => {
                project::create(globals, &name, description)
            }
            ProjectAction::Rename { name, project } => {
                project::rename(globals, &name, project.as_deref())
            }
            ProjectAction::Delete { project, yes } => {
                project::delete(globals, project.as_deref(), yes)
            }
        },
        Command::Secrets { action } => match action {
            SecretsAction::List { env, project, json } => {
                secrets::list(globals, env, project.as_deref(), json)
            }
            SecretsAction::Get { key, target } => secrets::get(globals, &key, &target),
            SecretsAction::Set {
                key,
                value,
                description,
                target,
            } => secrets::set(globals, &key, value, description, &target),
            SecretsAction::Delete { key, project, yes } => {
                secrets::delete(globals, &key, project.as_deref(), yes)
            }
        },
        Command::Pull { file, target } => pull::execute(globals, &file, &target),
        Command::Push {
            file,
            target,
            upsert,
        } => push::execute(globals, &file, &target, upsert),
        Command::Run { target, command } => run::execute(globals, &target, &command),
        Command::Config { action } => match action {
            ConfigAction::Show => config::show(globals),
            ConfigAction::SetEnv { environment } => config::set_env(globals, environment),
        },
        Command::Completions { shell } => completions::execute(shell),
    }
}

//! WindKeep - Secrets for your projects, from the terminal.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # Token login / logout / whoami
//! │   ├── org           # Organization list, switch, rename
//! │   ├── project       # Project list, switch, create, rename, delete
//! │   ├── secrets       # Secret CRUD operations
//! │   ├── pull / push   # .env sync with the remote store
//! │   ├── run           # Run with injected secrets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.windkeep/config.toml document
//!     ├── context       # Active context state machine
//!     ├── domain/       # Organizations, projects, secrets, environments
//!     ├── env           # KEY=VALUE codec
//!     ├── remote/       # Remote store
//!     │   ├── mod       # Remote trait
//!     │   └── http      # HTTP API implementation
//!     ├── store/        # Config storage backends
//!     │   ├── mod       # Store trait
//!     │   ├── fs        # Atomic filesystem storage
//!     │   └── memory    # In-memory storage
//!     ├── secrets       # Secret CRUD logic
//!     ├── sync          # Pull, push, run
//!     └── exec          # Child process launcher
//! ```
//!
//! # Features
//!
//! - Organization and project context that persists between runs
//! - Per-environment secrets (development, staging, production)
//! - Seamless .env file integration
//! - Secrets injected into child processes without touching disk

pub mod cli;
pub mod core;
pub mod error;

//! Domain types.

mod context;
mod environment;
mod organization;
mod project;
pub mod secret;
mod sync;
mod user;

pub use context::{ActiveContext, ActiveOrganization, ActiveProject, ContextState};
pub use environment::Environment;
pub use organization::{Organization, Role};
pub use project::{NewProject, Project, ProjectUpdate};
pub use secret::{NewSecret, Secret, SecretUpdate, SecretValue};
pub use sync::{PushFailure, PushReport};
pub use user::User;

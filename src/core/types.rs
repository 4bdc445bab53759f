//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Remote identifier of an organization.
pub type OrgId = String;

/// Remote identifier of a project.
pub type ProjectId = String;

/// Remote identifier of a secret record.
pub type SecretId = String;

/// A secret key name (e.g., DATABASE_URL, API_KEY).
///
/// Unique within a project, case-sensitive.
pub type SecretKey = String;

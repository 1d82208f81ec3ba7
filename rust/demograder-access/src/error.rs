use thiserror::Error;

use crate::Role;

/// A role name that does not name any level of the privilege scale.
///
/// The gate never surfaces this: an unparseable `role` parameter is
/// discarded and the viewer's default role is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The name matched none of `student`, `instructor`, `faculty`, `admin`.
    #[error("Unknown role name: {0:?}")]
    Unknown(String),
}

/// Terminal refusals produced by the access gate.
///
/// Each variant maps onto an HTTP status through [`Abort::status_code`].
/// Hosts translate the abort into whatever response their framework needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Abort {
    // 401 Unauthorized
    /// Login is required and the session carries no known principal.
    #[error("Not authenticated")]
    Unauthenticated,

    // 403 Forbidden
    /// The endpoint belongs to a specific user and the principal is neither
    /// that user nor an admin.
    #[error("Forbidden: endpoint is restricted to another user")]
    ForbiddenIdentity,

    /// The viewer is neither an instructor nor a student of the course in
    /// scope. Without a course in scope only admins have standing.
    #[error("Forbidden: viewer has no standing")]
    ForbiddenScope,

    /// The effective role is below the endpoint's minimum.
    #[error("Forbidden: role {role} is below the required {minimum}")]
    ForbiddenRole {
        /// The role the request resolved to.
        role: Role,
        /// The minimum the endpoint requires.
        minimum: Role,
    },
}

impl Abort {
    /// The HTTP status code for this abort.
    pub fn status_code(&self) -> u16 {
        match self {
            Abort::Unauthenticated => 401,
            Abort::ForbiddenIdentity | Abort::ForbiddenScope | Abort::ForbiddenRole { .. } => 403,
        }
    }

    /// A short, stable identifier for logs and tooling.
    pub fn code(&self) -> &'static str {
        match self {
            Abort::Unauthenticated => "UNAUTHENTICATED",
            Abort::ForbiddenIdentity => "FORBIDDEN_IDENTITY",
            Abort::ForbiddenScope => "FORBIDDEN_SCOPE",
            Abort::ForbiddenRole { .. } => "FORBIDDEN_ROLE",
        }
    }
}

/// Errors raised while loading an endpoint catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or does not match the schema.
    #[error("Invalid endpoint catalog: {0}")]
    Invalid(#[from] serde_json::Error),
}

use demograder_access::{CourseId, UserId};
use thiserror::Error;

/// The common error type used by this crate
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Another user already signs in with this email
    #[error("Email {0:?} is already taken")]
    DuplicateEmail(String),

    /// A user record needs a non-empty email
    #[error("A user needs an email")]
    MissingEmail,

    /// Two user records claim the same identifier
    #[error("User id {0} appears more than once")]
    DuplicateId(UserId),

    /// No user has this identifier
    #[error("Unknown user {0}")]
    UnknownUser(UserId),

    /// No course has this identifier
    #[error("Unknown course {0}")]
    UnknownCourse(CourseId),

    /// A roster document could not be parsed
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] serde_json::Error),
}

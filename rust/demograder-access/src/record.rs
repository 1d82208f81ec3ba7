//! Read-only records the gate reasons about.
//!
//! Users and courses are owned by the persistence collaborator; the gate only
//! ever reads them through a [`Directory`](crate::Directory).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Stable identifier of a stored course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A stored user.
///
/// `email` uniquely identifies the principal behind a session. The `admin`
/// and `faculty` flags are independent of each other; they are not roles
/// themselves but bound the highest role the user may render as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the directory.
    pub id: UserId,
    /// Unique login email.
    pub email: String,
    /// Name the user prefers to be addressed by.
    #[serde(default)]
    pub preferred_name: String,
    /// Family name.
    #[serde(default)]
    pub family_name: String,
    /// May act on any course, and may view the site as another user.
    #[serde(default)]
    pub admin: bool,
    /// Member of faculty.
    #[serde(default)]
    pub faculty: bool,
}

impl User {
    /// Whether both records denote the same stored user.
    pub fn is(&self, other: &User) -> bool {
        self.id == other.id
    }

    /// "Preferred Family", skipping whichever part is empty.
    pub fn display_name(&self) -> String {
        [self.preferred_name.as_str(), self.family_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier carried in course-scoped routes.
    pub id: CourseId,
    /// Human readable title.
    #[serde(default)]
    pub name: String,
}

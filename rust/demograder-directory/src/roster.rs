use demograder_access::{Course, CourseId, User, UserId};
use serde::{Deserialize, Serialize};

use crate::DirectoryError;

/// A user's membership of a course, either as instructor or as student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Membership {
    /// The member.
    pub user: UserId,
    /// The course.
    pub course: CourseId,
}

/// A complete, serializable snapshot of a directory.
///
/// ```
/// use demograder_directory::Roster;
///
/// let roster = Roster::from_json(r#"{
///     "users": [{ "id": 1, "email": "ada@x.edu" }],
///     "courses": [{ "id": 7, "name": "Compilers" }],
///     "enrolments": [{ "user": 1, "course": 7 }]
/// }"#).unwrap();
///
/// assert_eq!(roster.users.len(), 1);
/// assert!(roster.teaching.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    /// Every user.
    pub users: Vec<User>,
    /// Every course.
    pub courses: Vec<Course>,
    /// Who teaches what.
    pub teaching: Vec<Membership>,
    /// Who is enrolled in what.
    pub enrolments: Vec<Membership>,
}

impl Roster {
    /// Parse a roster from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the roster as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DirectoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! The privilege scale that pages render against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RoleError;

/// A level on the four-step privilege scale.
///
/// Levels are totally ordered (`Student < Instructor < Faculty < Admin`)
/// and compare by their numeric level. A requested role is always combined
/// with the viewer's ceiling through [`Role::at_most`], so a request can only
/// lower the level a page renders at, never raise it.
///
/// Names parse case-insensitively and serialize in lower case:
///
/// ```
/// use demograder_access::Role;
///
/// let requested: Role = "ADMIN".parse().unwrap();
/// assert_eq!(requested.at_most(Role::Faculty), Role::Faculty);
/// assert_eq!(Role::Instructor.to_string(), "instructor");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Enrolled in a course, or no standing above that.
    #[default]
    Student = 0,
    /// Teaching the course in scope.
    Instructor = 1,
    /// Holds the faculty flag.
    Faculty = 2,
    /// Holds the admin flag.
    Admin = 3,
}

impl Role {
    /// Every level, lowest first.
    pub const ALL: [Role; 4] = [Role::Student, Role::Instructor, Role::Faculty, Role::Admin];

    /// The lower-case name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }

    /// The numeric level (0 through 3).
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Clamp this role so that it does not exceed `ceiling`.
    pub fn at_most(self, ceiling: Role) -> Role {
        self.min(ceiling)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RoleError::Unknown(name.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}

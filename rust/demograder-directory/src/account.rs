//! Creating and editing user records.

use demograder_access::{User, UserId};
use serde::{Deserialize, Serialize};

/// The submitted contents of the user form.
///
/// A draft with an `id` edits that user; a draft without one creates a new
/// user. Admins use the same form to grant the `admin` and `faculty` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// The user being edited, or `None` to create one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Name the user prefers to be addressed by.
    #[serde(default)]
    pub preferred_name: String,
    /// Family name.
    #[serde(default)]
    pub family_name: String,
    /// Login email; must be unique.
    pub email: String,
    /// Grant the admin flag.
    #[serde(default)]
    pub admin: bool,
    /// Grant the faculty flag.
    #[serde(default)]
    pub faculty: bool,
}

impl UserDraft {
    /// A draft for a new user signing in as `email`.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// A draft pre-filled from an existing user, for editing.
    pub fn editing(user: &User) -> Self {
        Self {
            id: Some(user.id),
            preferred_name: user.preferred_name.clone(),
            family_name: user.family_name.clone(),
            email: user.email.clone(),
            admin: user.admin,
            faculty: user.faculty,
        }
    }

    /// Set the preferred and family names.
    pub fn named(mut self, preferred_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        self.preferred_name = preferred_name.into();
        self.family_name = family_name.into();
        self
    }

    /// Set the admin flag.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Set the faculty flag.
    pub fn faculty(mut self, faculty: bool) -> Self {
        self.faculty = faculty;
        self
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            preferred_name: self.preferred_name,
            family_name: self.family_name,
            admin: self.admin,
            faculty: self.faculty,
        }
    }
}

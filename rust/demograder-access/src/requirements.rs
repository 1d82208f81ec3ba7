//! Declarative per-endpoint access requirements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Role, UserId};

/// What an endpoint demands of a request before it may proceed.
///
/// Missing fields take their defaults when deserialized: login is required,
/// no specific user is required, and any role down to `student` suffices.
///
/// ```
/// use demograder_access::{Requirements, Role, UserId};
///
/// let account_page = Requirements::default().for_user(UserId(12));
/// let grading_page = Requirements::default().at_least(Role::Instructor);
/// let landing_page = Requirements::open();
///
/// assert!(!landing_page.login_required);
/// assert_eq!(account_page.user, Some(UserId(12)));
/// assert_eq!(grading_page.min_role, Role::Instructor);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    /// Refuse requests without a known principal.
    pub login_required: bool,
    /// Only this user (or an admin) may proceed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// The lowest effective role that may proceed.
    pub min_role: Role,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            login_required: true,
            user: None,
            min_role: Role::Student,
        }
    }
}

impl Requirements {
    /// Requirements for an endpoint that anonymous requests may reach.
    pub fn open() -> Self {
        Self {
            login_required: false,
            ..Self::default()
        }
    }

    /// Restrict to a specific user (admins are always let through).
    pub fn for_user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    /// Require at least `role`.
    pub fn at_least(mut self, role: Role) -> Self {
        self.min_role = role;
        self
    }
}

/// Named endpoints and their requirements.
///
/// Endpoints missing from the catalog fall back to
/// [`Requirements::default`]. A catalog can be loaded from JSON shaped as
/// an object keyed by endpoint name:
///
/// ```
/// use demograder_access::{Catalog, Role};
///
/// let catalog = Catalog::from_json(r#"{
///     "root": { "login_required": false },
///     "grades": { "min_role": "instructor" }
/// }"#).unwrap();
///
/// assert!(!catalog.requirements("root").login_required);
/// assert_eq!(catalog.requirements("grades").min_role, Role::Instructor);
/// assert!(catalog.requirements("elsewhere").login_required);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    endpoints: BTreeMap<String, Requirements>,
}

impl Catalog {
    /// The endpoints served by the grading site.
    pub fn standard() -> Self {
        let mut catalog = Self::default();

        catalog.insert("root", Requirements::open());
        for name in [
            "home",
            "user",
            "question",
            "submission",
            "download_submission",
            "result",
            "download_result",
            "file",
            "download_file",
            "user_form",
        ] {
            catalog.insert(name, Requirements::default());
        }

        catalog
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register (or replace) the requirements of an endpoint.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        requirements: Requirements,
    ) -> Option<Requirements> {
        self.endpoints.insert(name.into(), requirements)
    }

    /// The requirements registered for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Requirements> {
        self.endpoints.get(name)
    }

    /// The requirements for `name`, defaulting when it is not registered.
    pub fn requirements(&self, name: &str) -> Requirements {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Registered endpoint names with their requirements, sorted by name.
    pub fn endpoints(&self) -> impl Iterator<Item = (&str, &Requirements)> {
        self.endpoints
            .iter()
            .map(|(name, requirements)| (name.as_str(), requirements))
    }
}

//! The inbound request as the gate sees it.

use serde::{Deserialize, Serialize};

use crate::CourseId;

/// Query parameters that influence the viewpoint.
///
/// Hosts typically deserialize this straight from the query string; any
/// other parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Email of the user to render the page as. Honored for admins only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<String>,
    /// Name of the role to render the page as. Can only lower the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Everything the gate reads from one inbound request.
///
/// ```
/// use demograder_access::{CourseId, Request};
///
/// let request = Request::signed_in("ada@x.edu")
///     .with_role("student")
///     .with_course(CourseId(7));
///
/// assert_eq!(request.session.as_deref(), Some("ada@x.edu"));
/// assert_eq!(request.query.role.as_deref(), Some("student"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The identity stored in the session, if any.
    pub session: Option<String>,
    /// Query parameters.
    pub query: Query,
    /// Course identifier carried by the route, for course-scoped endpoints.
    pub course_id: Option<CourseId>,
}

impl Request {
    /// A request with no session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A request whose session names `email`.
    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            session: Some(email.into()),
            ..Self::default()
        }
    }

    /// Ask to view the page as the user with `email`.
    pub fn with_viewer(mut self, email: impl Into<String>) -> Self {
        self.query.viewer = Some(email.into());
        self
    }

    /// Ask to view the page at the role named `role`.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.query.role = Some(role.into());
        self
    }

    /// Scope the request to a course.
    pub fn with_course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Replace the query parameters.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

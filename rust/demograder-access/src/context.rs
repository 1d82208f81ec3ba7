use serde::{Deserialize, Serialize};

use crate::{Course, EffectiveRole, Relationship, Role, Standing, User};

/// The finished, request-local view of who is asking and what they may see.
///
/// Built once per request by the [`AccessGate`](crate::AccessGate) and never
/// shared across requests. In short:
///
/// - `user` is for checking actual permissions,
/// - `viewer` is for acting as a specific person,
/// - `role` is for deciding how pages render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    user: User,
    viewer: User,
    alternate_view: bool,
    course: Option<Course>,
    instructor: bool,
    student: bool,
    role: Role,
}

impl RequestContext {
    pub(crate) fn settle(standing: Standing, requested: Option<&str>) -> Self {
        let (scoped, Relationship { instructor, student }) = standing.into_parts();
        let (viewpoint, course) = scoped.into_parts();
        let (user, viewer, substituted) = viewpoint.into_parts();

        let EffectiveRole {
            role,
            alternate_view,
            ..
        } = EffectiveRole::resolve(&viewer, instructor, requested, substituted);

        tracing::debug!(viewer = %viewer.id, %role, alternate_view, "Resolved effective role");

        Self {
            user,
            viewer,
            alternate_view,
            course,
            instructor,
            student,
            role,
        }
    }

    /// The authenticated user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The user the page renders as.
    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    /// Whether the page renders from anything other than the user's own,
    /// full-privilege viewpoint.
    pub fn alternate_view(&self) -> bool {
        self.alternate_view
    }

    /// The course in scope.
    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// Whether the viewer may act as an instructor of the course.
    pub fn instructor(&self) -> bool {
        self.instructor
    }

    /// Whether the viewer is enrolled in the course.
    pub fn student(&self) -> bool {
        self.student
    }

    /// The role the page renders as.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// What the gate lets through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum Admission {
    /// The endpoint does not require login. Only the principal is resolved,
    /// and it may be absent.
    Open {
        /// The session user, if any.
        user: Option<User>,
    },
    /// A fully resolved context.
    Viewing(RequestContext),
}

impl Admission {
    /// The session user, if one was resolved.
    pub fn user(&self) -> Option<&User> {
        match self {
            Admission::Open { user } => user.as_ref(),
            Admission::Viewing(context) => Some(context.user()),
        }
    }

    /// The resolved context, for endpoints that require login.
    pub fn context(&self) -> Option<&RequestContext> {
        match self {
            Admission::Open { .. } => None,
            Admission::Viewing(context) => Some(context),
        }
    }

    /// Consume into the resolved context, if any.
    pub fn into_context(self) -> Option<RequestContext> {
        match self {
            Admission::Open { .. } => None,
            Admission::Viewing(context) => Some(context),
        }
    }
}

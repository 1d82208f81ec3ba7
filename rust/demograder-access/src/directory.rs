//! The data-access interface consumed from the persistence collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Course, CourseId, User};

/// Read access to users, courses and the relationships between them.
///
/// The gate depends on nothing but these four lookups, so any storage engine
/// can back it. Lookups are performed one after another within a request;
/// implementations are responsible for whatever read consistency they offer.
///
/// A lookup that fails is not fatal to the gate: the failure is logged and
/// treated the same as an absent record (or a `false` relationship).
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use demograder_access::{Course, CourseId, Directory, User};
///
/// /// A directory with nobody in it.
/// struct Empty;
///
/// #[async_trait]
/// impl Directory for Empty {
///     type Error = std::convert::Infallible;
///
///     async fn user_by_email(&self, _email: &str) -> Result<Option<User>, Self::Error> {
///         Ok(None)
///     }
///
///     async fn course_by_id(&self, _id: CourseId) -> Result<Option<Course>, Self::Error> {
///         Ok(None)
///     }
///
///     async fn teaching(&self, _user: &User, _course: &Course) -> Result<bool, Self::Error> {
///         Ok(false)
///     }
///
///     async fn taking(&self, _user: &User, _course: &Course) -> Result<bool, Self::Error> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait Directory: Send + Sync {
    /// Error type for lookup failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Find the user with the given email.
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, Self::Error>;

    /// Find the course with the given identifier.
    async fn course_by_id(&self, id: CourseId) -> Result<Option<Course>, Self::Error>;

    /// Whether `user` teaches `course`.
    async fn teaching(&self, user: &User, course: &Course) -> Result<bool, Self::Error>;

    /// Whether `user` is enrolled in `course`.
    async fn taking(&self, user: &User, course: &Course) -> Result<bool, Self::Error>;
}

#[async_trait]
impl<D> Directory for Arc<D>
where
    D: Directory + ?Sized,
{
    type Error = D::Error;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, Self::Error> {
        (**self).user_by_email(email).await
    }

    async fn course_by_id(&self, id: CourseId) -> Result<Option<Course>, Self::Error> {
        (**self).course_by_id(id).await
    }

    async fn teaching(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        (**self).teaching(user, course).await
    }

    async fn taking(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        (**self).taking(user, course).await
    }
}

pub(crate) async fn find_user<D: Directory>(directory: &D, email: &str) -> Option<User> {
    match directory.user_by_email(email).await {
        Ok(user) => user,
        Err(error) => {
            tracing::warn!(%email, %error, "User lookup failed; treating as absent");
            None
        }
    }
}

pub(crate) async fn find_course<D: Directory>(directory: &D, id: CourseId) -> Option<Course> {
    match directory.course_by_id(id).await {
        Ok(course) => course,
        Err(error) => {
            tracing::warn!(course = %id, %error, "Course lookup failed; treating as absent");
            None
        }
    }
}

pub(crate) async fn is_teaching<D: Directory>(directory: &D, user: &User, course: &Course) -> bool {
    directory
        .teaching(user, course)
        .await
        .unwrap_or_else(|error| {
            tracing::warn!(user = %user.id, course = %course.id, %error, "Teaching lookup failed");
            false
        })
}

pub(crate) async fn is_taking<D: Directory>(directory: &D, user: &User, course: &Course) -> bool {
    directory
        .taking(user, course)
        .await
        .unwrap_or_else(|error| {
            tracing::warn!(user = %user.id, course = %course.id, %error, "Enrolment lookup failed");
            false
        })
}

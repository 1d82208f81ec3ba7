use crate::directory::find_course;
use crate::{Course, CourseId, Directory, Standing, Viewpoint};

/// Load the course a request is scoped to.
///
/// Requests that carry no course identifier (account pages, the home page)
/// resolve to `None`, as do identifiers the directory does not know. No
/// access check happens here.
pub async fn resolve_course<D: Directory>(directory: &D, course_id: Option<CourseId>) -> Option<Course> {
    let id = course_id?;
    let course = find_course(directory, id).await;
    if course.is_none() {
        tracing::debug!(course = %id, "Requested course not found");
    }
    course
}

/// A viewpoint together with the course in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoped {
    viewpoint: Viewpoint,
    course: Option<Course>,
}

impl Scoped {
    /// Attach the course named by `course_id` to `viewpoint`.
    pub async fn resolve<D: Directory>(
        viewpoint: Viewpoint,
        directory: &D,
        course_id: Option<CourseId>,
    ) -> Self {
        let course = resolve_course(directory, course_id).await;
        Self { viewpoint, course }
    }

    /// The resolved viewpoint.
    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    /// The course in scope.
    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// Work out the viewer's standing in the course. See [`Standing::resolve`].
    pub async fn stand<D: Directory>(self, directory: &D) -> Standing {
        Standing::resolve(self, directory).await
    }

    pub(crate) fn into_parts(self) -> (Viewpoint, Option<Course>) {
        (self.viewpoint, self.course)
    }
}

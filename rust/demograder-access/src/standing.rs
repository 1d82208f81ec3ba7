use serde::{Deserialize, Serialize};

use crate::directory::{is_taking, is_teaching};
use crate::{Course, Directory, RequestContext, Scoped, User};

/// How a viewer relates to the course in scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// May act as an instructor.
    pub instructor: bool,
    /// Is enrolled.
    pub student: bool,
}

impl Relationship {
    /// Compute the viewer's relationship to `course`.
    ///
    /// Admins may act as an instructor of any course, in scope or not. Admins
    /// are not automatically students: only an actual enrolment makes anyone
    /// a student. Without a course in scope nobody else is either.
    pub async fn resolve<D: Directory>(directory: &D, viewer: &User, course: Option<&Course>) -> Self {
        let instructor = if viewer.admin {
            true
        } else {
            match course {
                Some(course) => is_teaching(directory, viewer, course).await,
                None => false,
            }
        };

        let student = match course {
            Some(course) => is_taking(directory, viewer, course).await,
            None => false,
        };

        Self {
            instructor,
            student,
        }
    }

    /// Whether the viewer has any standing at all.
    pub fn is_related(&self) -> bool {
        self.instructor || self.student
    }
}

/// A scoped viewpoint together with the viewer's standing in the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    scoped: Scoped,
    relationship: Relationship,
}

impl Standing {
    /// Resolve the viewer's standing in the scoped course.
    pub async fn resolve<D: Directory>(scoped: Scoped, directory: &D) -> Self {
        let relationship =
            Relationship::resolve(directory, scoped.viewpoint().viewer(), scoped.course()).await;
        tracing::debug!(
            viewer = %scoped.viewpoint().viewer().id,
            instructor = relationship.instructor,
            student = relationship.student,
            "Resolved standing"
        );
        Self {
            scoped,
            relationship,
        }
    }

    /// The scoped viewpoint.
    pub fn scoped(&self) -> &Scoped {
        &self.scoped
    }

    /// The viewer's relationship to the course.
    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    /// Settle the effective role and finish the context.
    ///
    /// `requested` is the `role` query parameter. See
    /// [`EffectiveRole::resolve`](crate::EffectiveRole::resolve).
    pub fn assume(self, requested: Option<&str>) -> RequestContext {
        RequestContext::settle(self, requested)
    }

    pub(crate) fn into_parts(self) -> (Scoped, Relationship) {
        (self.scoped, self.relationship)
    }
}

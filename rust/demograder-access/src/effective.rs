use serde::{Deserialize, Serialize};

use crate::{Role, User};

/// One step of the privilege ladder: a test on the viewer, and the ceiling
/// granted when it passes.
struct Rung {
    ceiling: Role,
    reached: fn(&User, bool) -> bool,
}

fn holds_admin_flag(viewer: &User, _instructor: bool) -> bool {
    viewer.admin
}

fn holds_faculty_flag(viewer: &User, _instructor: bool) -> bool {
    viewer.faculty
}

fn teaches_course(_viewer: &User, instructor: bool) -> bool {
    instructor
}

/// Highest rung first; the first rung reached wins. A viewer who reaches
/// none of them is a student.
const LADDER: [Rung; 3] = [
    Rung {
        ceiling: Role::Admin,
        reached: holds_admin_flag,
    },
    Rung {
        ceiling: Role::Faculty,
        reached: holds_faculty_flag,
    },
    Rung {
        ceiling: Role::Instructor,
        reached: teaches_course,
    },
];

/// The highest role `viewer` may render as.
///
/// Derived from the viewer's privilege flags and, below those, from their
/// instructor standing in the course in scope. Nothing in the request can
/// raise it.
pub fn role_ceiling(viewer: &User, instructor: bool) -> Role {
    LADDER
        .iter()
        .find(|rung| (rung.reached)(viewer, instructor))
        .map_or(Role::Student, |rung| rung.ceiling)
}

/// The role a page renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveRole {
    /// The role to render as.
    pub role: Role,
    /// The viewer's ceiling.
    pub ceiling: Role,
    /// Whether the rendered viewpoint differs from the principal's natural
    /// one, through viewer substitution or a lowered role.
    pub alternate_view: bool,
}

impl EffectiveRole {
    /// Clamp the requested role to the viewer's ceiling.
    ///
    /// `requested` is the `role` query parameter; a name that does not parse
    /// is discarded and the ceiling used in its place. Viewers whose ceiling
    /// is `student` render as students whatever they request.
    ///
    /// `alternate_view` carries the flag from viewer resolution and is raised
    /// when the resulting role falls below the ceiling.
    ///
    /// ```
    /// use demograder_access::{EffectiveRole, Role, User, UserId};
    ///
    /// let dean = User {
    ///     id: UserId(1),
    ///     email: "dean@x.edu".into(),
    ///     preferred_name: String::new(),
    ///     family_name: String::new(),
    ///     admin: false,
    ///     faculty: true,
    /// };
    ///
    /// let above = EffectiveRole::resolve(&dean, false, Some("admin"), false);
    /// assert_eq!(above.role, Role::Faculty);
    /// assert!(!above.alternate_view);
    ///
    /// let below = EffectiveRole::resolve(&dean, false, Some("student"), false);
    /// assert_eq!(below.role, Role::Student);
    /// assert!(below.alternate_view);
    /// ```
    pub fn resolve(
        viewer: &User,
        instructor: bool,
        requested: Option<&str>,
        alternate_view: bool,
    ) -> Self {
        let ceiling = role_ceiling(viewer, instructor);

        let role = if ceiling == Role::Student {
            Role::Student
        } else {
            requested
                .and_then(|name| match name.parse::<Role>() {
                    Ok(role) => Some(role),
                    Err(error) => {
                        tracing::debug!(%error, "Discarding role parameter");
                        None
                    }
                })
                .unwrap_or(ceiling)
                .at_most(ceiling)
        };

        Self {
            role,
            ceiling,
            alternate_view: alternate_view || role != ceiling,
        }
    }
}

use crate::directory::find_user;
use crate::{CourseId, Directory, Principal, Scoped, User};

/// Who a request acts as.
///
/// The `viewer` equals the authenticated `user` unless an admin asked to see
/// the site as somebody else. Every downstream privilege decision is made on
/// the viewer, never on the user, so substitution cannot grant anything the
/// admin could not already see. For non-admins the requested viewer is
/// ignored outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewpoint {
    user: User,
    viewer: User,
    alternate_view: bool,
}

impl Viewpoint {
    /// Resolve the viewer for `principal`.
    ///
    /// `requested` is the email from the `viewer` query parameter. It is only
    /// looked up for admins; when absent, unknown, or not honored the viewer
    /// is the principal itself.
    pub async fn resolve<D: Directory>(
        principal: Principal,
        directory: &D,
        requested: Option<&str>,
    ) -> Self {
        let user = principal.into_user();

        let substitute = match requested {
            Some(email) if user.admin => {
                let found = find_user(directory, email).await;
                if found.is_none() {
                    tracing::debug!(%email, "Requested viewer not found; viewing as self");
                }
                found
            }
            Some(email) => {
                tracing::debug!(user = %user.id, %email, "Ignoring viewer requested by non-admin");
                None
            }
            None => None,
        };

        let viewer = substitute.unwrap_or_else(|| user.clone());
        let alternate_view = !viewer.is(&user);

        Self {
            user,
            viewer,
            alternate_view,
        }
    }

    /// The authenticated user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The user the request acts as.
    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    /// Whether the viewer differs from the authenticated user.
    pub fn alternate_view(&self) -> bool {
        self.alternate_view
    }

    /// Resolve the course the request concerns. See [`Scoped::resolve`].
    pub async fn scope<D: Directory>(self, directory: &D, course_id: Option<CourseId>) -> Scoped {
        Scoped::resolve(self, directory, course_id).await
    }

    pub(crate) fn into_parts(self) -> (User, User, bool) {
        (self.user, self.viewer, self.alternate_view)
    }
}

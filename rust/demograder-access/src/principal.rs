use crate::directory::find_user;
use crate::{Directory, User, UserId, Viewpoint};

/// Map the session identity onto a stored user.
///
/// Returns `None` when the session is empty or names nobody the directory
/// knows. Whether that is fatal is for the gate to decide, since some
/// endpoints admit anonymous requests.
pub async fn resolve_principal<D: Directory>(directory: &D, session: Option<&str>) -> Option<User> {
    let email = session?;
    let user = find_user(directory, email).await;
    if user.is_none() {
        tracing::debug!(%email, "Session names no known user");
    }
    user
}

/// The authenticated user behind a request.
///
/// This is the first stage of a request context. Later stages are reached by
/// consuming it: [`Principal::view`] yields a [`Viewpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user: User,
}

impl Principal {
    /// Wrap a resolved user.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The authenticated user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Unwrap the authenticated user.
    pub fn into_user(self) -> User {
        self.user
    }

    /// Whether this principal satisfies a "specific user" requirement.
    ///
    /// Admins satisfy every such requirement.
    pub fn may_act_for(&self, required: Option<UserId>) -> bool {
        match required {
            Some(id) => self.user.admin || self.user.id == id,
            None => true,
        }
    }

    /// Decide who the request acts as. See [`Viewpoint::resolve`].
    pub async fn view<D: Directory>(self, directory: &D, viewer: Option<&str>) -> Viewpoint {
        Viewpoint::resolve(self, directory, viewer).await
    }
}

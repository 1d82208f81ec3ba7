use crate::{Abort, Admission, Directory, Principal, Request, Requirements, resolve_principal};

/// Runs every request through the ordered access checks.
///
/// The gate owns nothing but a handle on the [`Directory`]. Each call to
/// [`AccessGate::admit`] builds a fresh context from the request, so one gate
/// can serve any number of requests in parallel.
///
/// Checks run in this order, and the first failure ends the request:
///
/// 1. resolve the principal; refuse with [`Abort::Unauthenticated`] when
///    login is required and there is none,
/// 2. refuse with [`Abort::ForbiddenIdentity`] when the endpoint belongs to
///    another user and the principal is not an admin,
/// 3. resolve the viewer,
/// 4. resolve the course,
/// 5. resolve the viewer's standing in it,
/// 6. refuse with [`Abort::ForbiddenScope`] when the viewer is neither
///    instructor nor student,
/// 7. resolve the effective role,
/// 8. refuse with [`Abort::ForbiddenRole`] when that role is below the
///    endpoint's minimum.
///
/// Standing is checked before any role is computed, so lowering the role
/// can never stand in for a missing relationship to the course. Requests
/// without a course in scope are held to the same check: only admins hold
/// standing there.
#[derive(Debug, Clone)]
pub struct AccessGate<D> {
    directory: D,
}

impl<D: Directory> AccessGate<D> {
    /// Create a gate reading from `directory`.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// The directory this gate reads from.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Decide whether `request` may proceed under `requirements`.
    pub async fn admit(
        &self,
        request: &Request,
        requirements: &Requirements,
    ) -> Result<Admission, Abort> {
        let directory = &self.directory;

        let user = resolve_principal(directory, request.session.as_deref()).await;
        if !requirements.login_required {
            return Ok(Admission::Open { user });
        }

        let principal = Principal::new(user.ok_or_else(|| refuse(Abort::Unauthenticated))?);

        if !principal.may_act_for(requirements.user) {
            return Err(refuse(Abort::ForbiddenIdentity));
        }

        let standing = principal
            .view(directory, request.query.viewer.as_deref())
            .await
            .scope(directory, request.course_id)
            .await
            .stand(directory)
            .await;

        if !standing.relationship().is_related() {
            return Err(refuse(Abort::ForbiddenScope));
        }

        let context = standing.assume(request.query.role.as_deref());

        if context.role() < requirements.min_role {
            return Err(refuse(Abort::ForbiddenRole {
                role: context.role(),
                minimum: requirements.min_role,
            }));
        }

        Ok(Admission::Viewing(context))
    }
}

fn refuse(abort: Abort) -> Abort {
    tracing::info!(code = abort.code(), status = abort.status_code(), "Request refused");
    abort
}

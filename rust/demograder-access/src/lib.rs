//! Per-request access control for the grading site.
//!
//! Every page of the site is served on behalf of an authenticated user, but
//! not necessarily *as* that user or at their full privilege. This crate
//! decides, for one inbound request:
//!
//! - **who is asking**: the principal behind the session,
//! - **who the page renders as**: the viewer, which admins may substitute
//!   to preview the site as somebody else,
//! - **what the viewer may do in the course in scope**: instructor and/or
//!   student standing,
//! - **which role the page renders at**: the effective role, which may be
//!   lowered for previews but never raised above the viewer's ceiling,
//! - **whether the request may proceed at all**.
//!
//! # Quick Example
//!
//! ```rust
//! # mod example {
//! use demograder_access::{AccessGate, Directory, Request, Requirements, Role};
//!
//! pub async fn grade<D: Directory>(gate: &AccessGate<D>) {
//!     let request = Request::signed_in("ada@x.edu").with_role("student");
//!     let requirements = Requirements::default().at_least(Role::Instructor);
//!
//!     match gate.admit(&request, &requirements).await {
//!         Ok(admission) => { /* render with admission.context() */ }
//!         Err(abort) => { /* respond with abort.status_code() */ }
//!     }
//! }
//! # }
//! ```
//!
//! # Resolution Stages
//!
//! A context is assembled one stage at a time. Each stage consumes the
//! previous one, so partially resolved state is never shared:
//!
//! ```text
//! Principal                      (session → user)
//!   └── Viewpoint                (viewer, alternate view)
//!         └── Scoped             (course)
//!               └── Standing     (instructor, student)
//!                     └── RequestContext (effective role)
//! ```
//!
//! [`AccessGate`] drives the stages and interleaves the checks that may
//! refuse the request with an [`Abort`].
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Role`] | Ordered privilege scale |
//! | [`Directory`] | Data-access interface over users and courses |
//! | [`Request`] | Session identity, query parameters and course scope |
//! | [`Requirements`] | Per-endpoint login, user and minimum-role demands |
//! | [`Catalog`] | Named endpoints and their requirements |
//! | [`AccessGate`] | Runs the ordered checks |
//! | [`Admission`] | What the gate lets through |

#![warn(missing_docs)]

mod error;
pub use error::*;

mod role;
pub use role::*;

mod record;
pub use record::*;

mod directory;
pub use directory::Directory;

mod request;
pub use request::*;

mod requirements;
pub use requirements::*;

mod principal;
pub use principal::*;

mod viewpoint;
pub use viewpoint::*;

mod scope;
pub use scope::*;

mod standing;
pub use standing::*;

mod effective;
pub use effective::*;

mod context;
pub use context::*;

mod gate;
pub use gate::*;

#[cfg(test)]
mod testing;

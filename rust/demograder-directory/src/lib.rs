//! An in-memory [`Directory`](demograder_access::Directory) for the grading
//! site.
//!
//! [`MemoryDirectory`] keeps users, courses and who teaches or takes what in
//! process memory. It backs tests and tooling, and doubles as a reference for
//! the lookups a persistent directory has to provide.
//!
//! # Example
//!
//! ```
//! # async fn example() -> Result<(), demograder_directory::DirectoryError> {
//! use demograder_access::{AccessGate, Course, CourseId, Request, Requirements};
//! use demograder_directory::{MemoryDirectory, UserDraft};
//!
//! let directory = MemoryDirectory::new();
//! let ada = directory.save_user(UserDraft::new("ada@x.edu")).await?;
//! directory.insert_course(Course { id: CourseId(7), name: "Compilers".into() }).await;
//! directory.enroll(ada.id, CourseId(7)).await?;
//!
//! let gate = AccessGate::new(directory);
//! let request = Request::signed_in("ada@x.edu").with_course(CourseId(7));
//! assert!(gate.admit(&request, &Requirements::default()).await.is_ok());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
pub use error::*;

mod account;
pub use account::*;

mod roster;
pub use roster::*;

mod memory;
pub use memory::*;

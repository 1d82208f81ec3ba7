use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use demograder_access::{Course, CourseId, Directory, User, UserId};
use tokio::sync::RwLock;

use crate::{DirectoryError, Membership, Roster, UserDraft};

#[derive(Default)]
struct Records {
    users: BTreeMap<UserId, User>,
    emails: HashMap<String, UserId>,
    courses: BTreeMap<CourseId, Course>,
    teaching: BTreeSet<(UserId, CourseId)>,
    taking: BTreeSet<(UserId, CourseId)>,
}

impl Records {
    fn next_user_id(&self) -> UserId {
        self.users
            .keys()
            .next_back()
            .map_or(UserId(1), |UserId(last)| UserId(last + 1))
    }

    fn save_user(&mut self, draft: UserDraft) -> Result<User, DirectoryError> {
        let id = match draft.id {
            Some(id) if self.users.contains_key(&id) => id,
            Some(id) => return Err(DirectoryError::UnknownUser(id)),
            None => self.next_user_id(),
        };
        self.put_user(draft.into_user(id))
    }

    /// Store `user` under its id, trimming its email first. Emails stay
    /// unique across users.
    fn put_user(&mut self, mut user: User) -> Result<User, DirectoryError> {
        user.email = user.email.trim().to_string();
        if user.email.is_empty() {
            return Err(DirectoryError::MissingEmail);
        }
        if let Some(holder) = self.emails.get(&user.email) {
            if *holder != user.id {
                return Err(DirectoryError::DuplicateEmail(user.email));
            }
        }

        if let Some(previous) = self.users.get(&user.id) {
            self.emails.remove(&previous.email);
        }
        self.emails.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn check_membership(&self, membership: Membership) -> Result<(UserId, CourseId), DirectoryError> {
        if !self.users.contains_key(&membership.user) {
            return Err(DirectoryError::UnknownUser(membership.user));
        }
        if !self.courses.contains_key(&membership.course) {
            return Err(DirectoryError::UnknownCourse(membership.course));
        }
        Ok((membership.user, membership.course))
    }

    fn memberships(pairs: &BTreeSet<(UserId, CourseId)>) -> Vec<Membership> {
        pairs
            .iter()
            .map(|&(user, course)| Membership { user, course })
            .collect()
    }
}

/// A [`Directory`] kept entirely in memory.
///
/// Clones share the same records, so one directory can back a gate while
/// another handle keeps editing it.
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    records: Arc<RwLock<Records>>,
}

impl MemoryDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory holding everything in `roster`.
    ///
    /// Fails if two users share an id or an email, or if a membership names
    /// a user or course the roster does not contain.
    pub fn from_roster(roster: Roster) -> Result<Self, DirectoryError> {
        let mut records = Records::default();

        for user in roster.users {
            if records.users.contains_key(&user.id) {
                return Err(DirectoryError::DuplicateId(user.id));
            }
            records.put_user(user)?;
        }
        for course in roster.courses {
            records.courses.insert(course.id, course);
        }
        for membership in roster.teaching {
            let pair = records.check_membership(membership)?;
            records.teaching.insert(pair);
        }
        for membership in roster.enrolments {
            let pair = records.check_membership(membership)?;
            records.taking.insert(pair);
        }

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Snapshot the directory's contents.
    pub async fn roster(&self) -> Roster {
        let records = self.records.read().await;
        Roster {
            users: records.users.values().cloned().collect(),
            courses: records.courses.values().cloned().collect(),
            teaching: Records::memberships(&records.teaching),
            enrolments: Records::memberships(&records.taking),
        }
    }

    /// Create or edit a user from a submitted form.
    ///
    /// A draft with an id edits that user and fails with
    /// [`DirectoryError::UnknownUser`] if there is none; a draft without one
    /// creates a user with the next free id. Emails stay unique.
    pub async fn save_user(&self, draft: UserDraft) -> Result<User, DirectoryError> {
        let user = self.records.write().await.save_user(draft)?;
        tracing::debug!(user = %user.id, email = %user.email, "Saved user");
        Ok(user)
    }

    /// Look up a user by id.
    pub async fn user(&self, id: UserId) -> Option<User> {
        self.records.read().await.users.get(&id).cloned()
    }

    /// Add or replace a course.
    pub async fn insert_course(&self, course: Course) -> Option<Course> {
        self.records.write().await.courses.insert(course.id, course)
    }

    /// Record that `user` teaches `course`.
    pub async fn assign_instructor(&self, user: UserId, course: CourseId) -> Result<(), DirectoryError> {
        let mut records = self.records.write().await;
        let pair = records.check_membership(Membership { user, course })?;
        records.teaching.insert(pair);
        Ok(())
    }

    /// Record that `user` is enrolled in `course`.
    pub async fn enroll(&self, user: UserId, course: CourseId) -> Result<(), DirectoryError> {
        let mut records = self.records.write().await;
        let pair = records.check_membership(Membership { user, course })?;
        records.taking.insert(pair);
        Ok(())
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    type Error = DirectoryError;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, Self::Error> {
        let records = self.records.read().await;
        Ok(records
            .emails
            .get(email)
            .and_then(|id| records.users.get(id))
            .cloned())
    }

    async fn course_by_id(&self, id: CourseId) -> Result<Option<Course>, Self::Error> {
        Ok(self.records.read().await.courses.get(&id).cloned())
    }

    async fn teaching(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        Ok(self
            .records
            .read()
            .await
            .teaching
            .contains(&(user.id, course.id)))
    }

    async fn taking(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        Ok(self
            .records
            .read()
            .await
            .taking
            .contains(&(user.id, course.id)))
    }
}

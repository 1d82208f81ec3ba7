//! A small in-process directory for unit tests.

use std::collections::BTreeSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{Course, CourseId, Directory, User, UserId};

#[derive(Debug, thiserror::Error)]
#[error("Directory unavailable")]
pub struct Unavailable;

#[derive(Default)]
struct Records {
    users: Vec<User>,
    courses: Vec<Course>,
    teaching: BTreeSet<(UserId, CourseId)>,
    taking: BTreeSet<(UserId, CourseId)>,
    failing: bool,
}

#[derive(Default)]
pub struct Fixture {
    records: Mutex<Records>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&self, email: &str, admin: bool, faculty: bool) -> User {
        let mut records = self.records.lock();
        let user = User {
            id: UserId(records.users.len() as u64 + 1),
            email: email.to_string(),
            preferred_name: String::new(),
            family_name: String::new(),
            admin,
            faculty,
        };
        records.users.push(user.clone());
        user
    }

    pub fn user(&self, email: &str) -> User {
        self.add(email, false, false)
    }

    pub fn admin(&self, email: &str) -> User {
        self.add(email, true, false)
    }

    pub fn faculty(&self, email: &str) -> User {
        self.add(email, false, true)
    }

    pub fn course(&self, id: u64) -> Course {
        let course = Course {
            id: CourseId(id),
            name: format!("Course {id}"),
        };
        self.records.lock().courses.push(course.clone());
        course
    }

    pub fn teach(&self, user: &User, course: &Course) {
        self.records.lock().teaching.insert((user.id, course.id));
    }

    pub fn enroll(&self, user: &User, course: &Course) {
        self.records.lock().taking.insert((user.id, course.id));
    }

    /// Make every subsequent lookup fail.
    pub fn fail_lookups(&self) {
        self.records.lock().failing = true;
    }

    fn check(&self) -> Result<(), Unavailable> {
        if self.records.lock().failing {
            Err(Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Directory for Fixture {
    type Error = Unavailable;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, Self::Error> {
        self.check()?;
        let records = self.records.lock();
        Ok(records.users.iter().find(|user| user.email == email).cloned())
    }

    async fn course_by_id(&self, id: CourseId) -> Result<Option<Course>, Self::Error> {
        self.check()?;
        let records = self.records.lock();
        Ok(records.courses.iter().find(|course| course.id == id).cloned())
    }

    async fn teaching(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.records.lock().teaching.contains(&(user.id, course.id)))
    }

    async fn taking(&self, user: &User, course: &Course) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.records.lock().taking.contains(&(user.id, course.id)))
    }
}

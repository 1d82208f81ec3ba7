//! End-to-end access decisions against an in-memory directory.
//!
//! Each test builds a small roster, runs requests through the access gate
//! and checks the admission or abort that comes back.

use std::sync::Arc;

use anyhow::Result;
use demograder_access::{
    Abort, AccessGate, Admission, Catalog, CourseId, Request, RequestContext, Requirements, Role,
    UserId, role_ceiling,
};
use demograder_directory::{MemoryDirectory, Roster};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const ROSTER: &str = r#"{
    "users": [
        { "id": 1, "email": "root@x.edu", "preferred_name": "Root", "admin": true },
        { "id": 2, "email": "dean@x.edu", "preferred_name": "Dean", "faculty": true },
        { "id": 3, "email": "teacher@x.edu", "preferred_name": "Tess" },
        { "id": 4, "email": "pupil@x.edu", "preferred_name": "Pat" },
        { "id": 5, "email": "other@x.edu", "preferred_name": "Oli" }
    ],
    "courses": [
        { "id": 7, "name": "Compilers" },
        { "id": 9, "name": "Databases" }
    ],
    "teaching": [
        { "user": 2, "course": 7 },
        { "user": 3, "course": 7 }
    ],
    "enrolments": [
        { "user": 4, "course": 7 },
        { "user": 5, "course": 9 }
    ]
}"#;

fn gate() -> Result<AccessGate<MemoryDirectory>> {
    let roster = Roster::from_json(ROSTER)?;
    Ok(AccessGate::new(MemoryDirectory::from_roster(roster)?))
}

async fn context(
    gate: &AccessGate<MemoryDirectory>,
    request: Request,
    requirements: Requirements,
) -> Result<RequestContext> {
    match gate.admit(&request, &requirements).await? {
        Admission::Viewing(context) => Ok(context),
        Admission::Open { .. } => anyhow::bail!("expected a resolved context"),
    }
}

#[test_log::test(tokio::test)]
async fn it_refuses_anonymous_requests_to_login_pages() -> Result<()> {
    let gate = gate()?;

    let result = gate
        .admit(&Request::anonymous(), &Requirements::default())
        .await;

    assert_eq!(result, Err(Abort::Unauthenticated));
    assert_eq!(Abort::Unauthenticated.status_code(), 401);
    Ok(())
}

#[tokio::test]
async fn it_ignores_viewer_substitution_by_non_admins() -> Result<()> {
    let gate = gate()?;

    let context = context(
        &gate,
        Request::signed_in("pupil@x.edu")
            .with_viewer("other@x.edu")
            .with_course(CourseId(7)),
        Requirements::default(),
    )
    .await?;

    assert_eq!(context.viewer().email, context.user().email);
    assert_eq!(context.viewer().email, "pupil@x.edu");
    assert!(!context.alternate_view());
    Ok(())
}

#[tokio::test]
async fn it_treats_admins_as_instructors_of_unrelated_courses() -> Result<()> {
    let gate = gate()?;

    let context = context(
        &gate,
        Request::signed_in("root@x.edu").with_course(CourseId(7)),
        Requirements::default(),
    )
    .await?;

    assert!(context.instructor());
    assert!(!context.student());
    assert_eq!(context.role(), Role::Admin);
    assert_eq!(context.course().map(|course| course.name.as_str()), Some("Compilers"));
    Ok(())
}

#[tokio::test]
async fn it_clamps_faculty_requesting_admin() -> Result<()> {
    let gate = gate()?;

    let context = context(
        &gate,
        Request::signed_in("dean@x.edu")
            .with_role("admin")
            .with_course(CourseId(7)),
        Requirements::default(),
    )
    .await?;

    assert_eq!(context.role(), Role::Faculty);
    assert!(!context.alternate_view());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_refuses_signed_in_users_without_a_course_unless_admin() -> Result<()> {
    let gate = gate()?;

    for email in ["dean@x.edu", "teacher@x.edu", "pupil@x.edu"] {
        let result = gate
            .admit(&Request::signed_in(email), &Requirements::default())
            .await;
        assert_eq!(result, Err(Abort::ForbiddenScope), "{email} has no standing");
    }

    let context = context(&gate, Request::signed_in("root@x.edu"), Requirements::default()).await?;
    assert_eq!(context.course(), None);
    assert!(context.instructor());
    assert_eq!(context.role(), Role::Admin);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_locks_instructors_previewing_as_students_out_of_instructor_pages() -> Result<()> {
    let gate = gate()?;
    let requirements = Requirements::default().at_least(Role::Instructor);

    let natural = context(
        &gate,
        Request::signed_in("teacher@x.edu").with_course(CourseId(7)),
        requirements.clone(),
    )
    .await?;
    assert_eq!(natural.role(), Role::Instructor);

    let previewing = gate
        .admit(
            &Request::signed_in("teacher@x.edu")
                .with_course(CourseId(7))
                .with_role("student"),
            &requirements,
        )
        .await;
    assert_eq!(
        previewing,
        Err(Abort::ForbiddenRole {
            role: Role::Student,
            minimum: Role::Instructor
        })
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_refuses_students_without_standing() -> Result<()> {
    let gate = gate()?;

    let result = gate
        .admit(
            &Request::signed_in("pupil@x.edu").with_course(CourseId(9)),
            &Requirements::default(),
        )
        .await;

    assert_eq!(result, Err(Abort::ForbiddenScope));
    assert_eq!(Abort::ForbiddenScope.status_code(), 403);
    Ok(())
}

#[tokio::test]
async fn it_lets_admins_preview_courses_as_a_student() -> Result<()> {
    let gate = gate()?;

    let context = context(
        &gate,
        Request::signed_in("root@x.edu")
            .with_viewer("pupil@x.edu")
            .with_course(CourseId(7)),
        Requirements::default(),
    )
    .await?;

    assert_eq!(context.user().email, "root@x.edu");
    assert_eq!(context.viewer().email, "pupil@x.edu");
    assert!(!context.instructor());
    assert!(context.student());
    assert_eq!(context.role(), Role::Student);
    assert!(context.alternate_view());
    Ok(())
}

#[tokio::test]
async fn it_checks_standing_against_the_viewer_not_the_admin() -> Result<()> {
    let gate = gate()?;

    // The admin could see course 9, but the pupil they are viewing as cannot.
    let result = gate
        .admit(
            &Request::signed_in("root@x.edu")
                .with_viewer("pupil@x.edu")
                .with_course(CourseId(9)),
            &Requirements::default(),
        )
        .await;

    assert_eq!(result, Err(Abort::ForbiddenScope));
    Ok(())
}

#[tokio::test]
async fn it_lets_users_and_admins_through_account_pages() -> Result<()> {
    let gate = gate()?;
    let catalog = Catalog::standard();
    let account = catalog.requirements("user_form").for_user(UserId(4));

    let own = gate
        .admit(&Request::signed_in("pupil@x.edu").with_course(CourseId(7)), &account)
        .await?;
    assert_eq!(own.user().map(|user| user.email.as_str()), Some("pupil@x.edu"));

    let admin = gate.admit(&Request::signed_in("root@x.edu"), &account).await?;
    assert_eq!(admin.context().map(|context| context.role()), Some(Role::Admin));

    let stranger = gate
        .admit(&Request::signed_in("other@x.edu").with_course(CourseId(9)), &account)
        .await;
    assert_eq!(stranger, Err(Abort::ForbiddenIdentity));

    // Identity alone is not standing.
    let unscoped = gate.admit(&Request::signed_in("pupil@x.edu"), &account).await;
    assert_eq!(unscoped, Err(Abort::ForbiddenScope));
    Ok(())
}

#[tokio::test]
async fn it_serves_the_landing_page_to_everyone() -> Result<()> {
    let gate = gate()?;
    let root_page = Catalog::standard().requirements("root");

    let anonymous = gate.admit(&Request::anonymous(), &root_page).await?;
    assert_eq!(anonymous, Admission::Open { user: None });

    let signed_in = gate.admit(&Request::signed_in("dean@x.edu"), &root_page).await?;
    assert_eq!(signed_in.user().map(|user| user.email.as_str()), Some("dean@x.edu"));
    Ok(())
}

#[tokio::test]
async fn it_resolves_identical_requests_identically() -> Result<()> {
    let gate = gate()?;
    let request = Request::signed_in("root@x.edu")
        .with_viewer("teacher@x.edu")
        .with_role("student")
        .with_course(CourseId(7));

    let first = gate.admit(&request, &Requirements::default()).await;
    let second = gate.admit(&request, &Requirements::default()).await;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_serves_requests_in_parallel() -> Result<()> {
    let gate = Arc::new(gate()?);

    let tasks = ["root@x.edu", "dean@x.edu", "teacher@x.edu", "pupil@x.edu"]
        .into_iter()
        .cycle()
        .take(64)
        .map(|email| {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move {
                let request = Request::signed_in(email).with_course(CourseId(7));
                gate.admit(&request, &Requirements::default()).await
            })
        })
        .collect::<Vec<_>>();

    for task in tasks {
        let admission = task.await??;
        let context = admission.into_context().expect("login was required");
        assert!(context.instructor() || context.student());
    }
    Ok(())
}

const EMAILS: [&str; 6] = [
    "root@x.edu",
    "dean@x.edu",
    "teacher@x.edu",
    "pupil@x.edu",
    "other@x.edu",
    "ghost@x.edu",
];

fn optional<T: Clone + std::fmt::Debug + 'static>(
    values: Vec<T>,
) -> impl Strategy<Value = Option<T>> {
    prop_oneof![Just(None), prop::sample::select(values).prop_map(Some)]
}

proptest! {
    #[test]
    fn it_upholds_viewpoint_invariants(
        session in optional(EMAILS.to_vec()),
        viewer in optional(EMAILS.to_vec()),
        role in optional(vec!["student", "instructor", "faculty", "admin", "ADMIN", "dean"]),
        course in optional(vec![7u64, 9, 404]),
        minimum in prop::sample::select(Role::ALL.to_vec()),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let gate = gate().map_err(|error| TestCaseError::fail(error.to_string()))?;

        let mut request = Request::anonymous();
        request.session = session.map(str::to_string);
        request.query.viewer = viewer.map(str::to_string);
        request.query.role = role.map(str::to_string);
        request.course_id = course.map(CourseId);
        let requirements = Requirements::default().at_least(minimum);

        let outcome = runtime.block_on(gate.admit(&request, &requirements));

        if let Ok(Admission::Viewing(context)) = outcome {
            let ceiling = role_ceiling(context.viewer(), context.instructor());

            if !context.user().admin {
                prop_assert_eq!(context.viewer(), context.user());
            }
            prop_assert!(context.role() <= ceiling);
            prop_assert!(context.role() >= minimum);
            prop_assert_eq!(
                context.alternate_view(),
                !context.viewer().is(context.user()) || context.role() != ceiling
            );
            prop_assert!(context.instructor() || context.student());
        }
    }
}

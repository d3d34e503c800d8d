use cl_core::{ChecklistAttributes, Issue, NewChecklist, User};
use cl_db::{IssueRepository, ProjectRepository, UserRepository};

use sqlx::SqlitePool;

/// Creates a project with one issue
pub async fn create_test_issue(pool: &SqlitePool) -> Issue {
    let project_id = ProjectRepository::create(pool, "test-project", "Test Project")
        .await
        .expect("Failed to create test project");

    IssueRepository::create(pool, project_id, "Test issue")
        .await
        .expect("Failed to create test issue")
}

/// Creates a non-admin user
pub async fn create_test_user(pool: &SqlitePool, login: &str) -> User {
    UserRepository::create(pool, login, Some(&format!("{login}-key")), false)
        .await
        .expect("Failed to create test user")
}

/// A new checklist item with only a subject set
pub fn new_test_checklist(issue_id: i64, subject: &str) -> NewChecklist {
    NewChecklist::from_attributes(
        issue_id,
        ChecklistAttributes {
            subject: Some(subject.to_string()),
            ..Default::default()
        },
    )
}

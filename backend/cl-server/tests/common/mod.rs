#![allow(dead_code)]

//! Test infrastructure for cl-server API tests

use cl_config::Config;
use cl_core::{ChecklistAttributes, Checklist, Issue, NewChecklist, ProjectMember, Role};
use cl_db::{
    ChecklistRepository, IssueRepository, ProjectMemberRepository, ProjectRepository,
    UserRepository,
};
use cl_server::{AppState, build_router};

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    cl_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with the given configuration
pub async fn create_test_app_state(config: Config) -> AppState {
    AppState::new(create_test_pool().await, config)
}

/// Config with done-ratio recalculation switched off by the checklist toggle
pub fn config_without_recalculation() -> Config {
    let mut config = Config::default();
    config.checklists.issue_done_ratio = false;
    config
}

/// A project with one issue, plus the state that holds them
pub struct TestContext {
    pub state: AppState,
    pub project_id: i64,
    pub issue: Issue,
}

pub async fn setup() -> TestContext {
    setup_with_config(Config::default()).await
}

pub async fn setup_with_config(config: Config) -> TestContext {
    let state = create_test_app_state(config).await;
    let project_id = ProjectRepository::create(&state.pool, "test-project", "Test Project")
        .await
        .expect("Failed to create test project");
    let issue = IssueRepository::create(&state.pool, project_id, "Test issue")
        .await
        .expect("Failed to create test issue");

    TestContext {
        state,
        project_id,
        issue,
    }
}

/// Create an issue with a fixed id in the given project
pub async fn create_issue_with_id(pool: &SqlitePool, project_id: i64, id: i64) -> Issue {
    sqlx::query(
        "INSERT INTO issues (id, project_id, subject, done_ratio, updated_at) VALUES (?, ?, ?, 0, ?)",
    )
    .bind(id)
    .bind(project_id)
    .bind(format!("Issue {id}"))
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create issue");

    IssueRepository::find_by_id(pool, id)
        .await
        .expect("Failed to load issue")
        .expect("Issue missing")
}

/// Create a user with the given role on the project. Returns the API key.
pub async fn create_member(pool: &SqlitePool, project_id: i64, login: &str, role: Role) -> String {
    let api_key = format!("{login}-key");
    let user = UserRepository::create(pool, login, Some(&api_key), false)
        .await
        .expect("Failed to create test user");
    ProjectMemberRepository::upsert(pool, &ProjectMember::new(project_id, user.id, role))
        .await
        .expect("Failed to add project member");
    api_key
}

/// Create a user who belongs to no project. Returns the API key.
pub async fn create_outsider(pool: &SqlitePool, login: &str) -> String {
    let api_key = format!("{login}-key");
    UserRepository::create(pool, login, Some(&api_key), false)
        .await
        .expect("Failed to create test user");
    api_key
}

/// Create an administrator who belongs to no project. Returns the API key.
pub async fn create_admin(pool: &SqlitePool, login: &str) -> String {
    let api_key = format!("{login}-key");
    UserRepository::create(pool, login, Some(&api_key), true)
        .await
        .expect("Failed to create admin user");
    api_key
}

/// Insert a checklist item directly
pub async fn create_item(pool: &SqlitePool, issue_id: i64, subject: &str, is_done: bool) -> Checklist {
    let item = NewChecklist::from_attributes(
        issue_id,
        ChecklistAttributes {
            subject: Some(subject.to_string()),
            is_done: Some(is_done),
            ..Default::default()
        },
    );
    ChecklistRepository::create(pool, &item)
        .await
        .expect("Failed to create checklist item")
}

pub async fn find_item(pool: &SqlitePool, id: i64) -> Option<Checklist> {
    ChecklistRepository::find_by_id(pool, id)
        .await
        .expect("Failed to load checklist item")
}

pub async fn find_issue(pool: &SqlitePool, id: i64) -> Issue {
    IssueRepository::find_by_id(pool, id)
        .await
        .expect("Failed to load issue")
        .expect("Issue missing")
}

/// Request with an optional API key and JSON body
pub fn json_request(
    method: &str,
    uri: &str,
    api_key: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-Api-Key", key);
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Run one request through a fresh router
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let app = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

pub fn to_json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

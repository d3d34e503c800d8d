use crate::{AppState, CurrentUser};

use cl_config::Config;
use cl_db::UserRepository;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;
use sqlx::sqlite::SqlitePoolOptions;

async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    cl_db::migrate(&pool).await.expect("Failed to run migrations");

    AppState::new(pool, Config::default())
}

#[tokio::test]
async fn test_extractor_without_header_is_anonymous() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(user.is_anonymous());
    assert_eq!(user.id(), None);
    assert!(!user.is_admin());
}

#[tokio::test]
async fn test_extractor_with_known_key() {
    let state = create_test_state().await;
    let created = UserRepository::create(&state.pool, "alice", Some("alice-key"), false)
        .await
        .unwrap();
    let request = Request::builder()
        .header("X-Api-Key", "alice-key")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.id(), Some(created.id));
}

#[tokio::test]
async fn test_extractor_with_unknown_key_is_rejected() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Api-Key", "nobody-key")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

use crate::ApiError;

use cl_core::{CoreError, ValidationErrors};
use cl_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Checklist 9 not found")).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"].as_str(), some(eq("NOT_FOUND")));
    assert_that!(json["error"]["message"].as_str(), some(eq("Checklist 9 not found")));
    assert_that!(json["error"].get("fields"), none());
}

#[tokio::test]
async fn test_validation_error_returns_422_with_fields() {
    let mut errors = ValidationErrors::new();
    errors.add("subject", "cannot be blank");
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::UNPROCESSABLE_ENTITY));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["fields"][0]["field"].as_str(), some(eq("subject")));
    assert_that!(json["error"]["fields"][0]["message"].as_str(), some(eq("cannot be blank")));
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Login required")).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"]["code"].as_str(), some(eq("UNAUTHORIZED")));
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("nope")).await;

    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"]["code"].as_str(), some(eq("FORBIDDEN")));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let mut errors = ValidationErrors::new();
    errors.add("subject", "cannot be blank");
    let core_error = CoreError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    assert_that!(api_error.status(), eq(StatusCode::UNPROCESSABLE_ENTITY));
}

#[test]
fn test_row_not_found_converts_to_not_found() {
    let db_error = DbError::Sqlx {
        source: sqlx::Error::RowNotFound,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert_that!(api_error.status(), eq(StatusCode::NOT_FOUND));
}

#[test]
fn test_other_db_errors_convert_to_internal() {
    let db_error = DbError::Migration {
        message: "checksum mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert_that!(api_error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_internal_error_hides_database_details() {
    let api_error: ApiError = sqlx::Error::PoolTimedOut.into();

    let (status, json) = body_json(api_error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["message"].as_str(), some(eq("Database operation failed")));
}

#[tokio::test]
async fn test_position_out_of_range_converts_to_position_field_error() {
    let db_error = DbError::PositionOutOfRange {
        issue_id: 1,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(db_error.into()).await;

    assert_that!(status, eq(StatusCode::UNPROCESSABLE_ENTITY));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["fields"][0]["field"].as_str(), some(eq("position")));
}

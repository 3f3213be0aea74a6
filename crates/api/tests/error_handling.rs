//! Tests for the mapping of domain errors onto HTTP responses.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use orgchart_api::error::AppError;
use orgchart_core::error::{CoreError, StoreError};

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = render(CoreError::not_found("Employee", "e-1").into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Employee with id e-1 not found");
}

#[tokio::test]
async fn already_exists_maps_to_409() {
    let err = CoreError::AlreadyExists {
        entity: "Compensation",
        id: "e-1".to_string(),
    };
    let (status, json) = render(err.into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = render(CoreError::Validation("salary".into()).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn revisited_employee_maps_to_409() {
    let err = CoreError::EmployeeRevisited { id: "e-1".to_string() };
    let (status, json) = render(err.into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "EMPLOYEE_REVISITED");
}

#[tokio::test]
async fn limit_exceeded_maps_to_422() {
    let (status, json) = render(CoreError::LimitExceeded("too many".into()).into()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "LIMIT_EXCEEDED");
}

#[tokio::test]
async fn store_duplicate_maps_to_409_conflict() {
    let err = CoreError::Store(StoreError::Duplicate("uq_compensations_employee_id".into()));
    let (status, json) = render(err.into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn store_fault_is_sanitized_500() {
    let err = CoreError::Store(StoreError::Inconsistent("secret table detail".into()));
    let (status, json) = render(err.into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_matches!(json["error"].as_str(), Some(msg) if !msg.contains("secret"));
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = render(AppError::BadRequest("bad".into()).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad");
}

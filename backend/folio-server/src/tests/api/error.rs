use crate::ApiError;

use folio_core::{ProjectPayload, validate_project_input};
use folio_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_body() {
    let (status, json) = body_json(ApiError::not_found("API route not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "API route not found" }));
}

#[tokio::test]
async fn test_validation_error_converts_to_400_with_field_details() {
    let validation = validate_project_input(ProjectPayload {
        title: Some(String::new()),
        description: Some("x".into()),
        ..Default::default()
    })
    .unwrap_err();

    let (status, json) = body_json(ApiError::from(validation)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid project data"));
    assert!(message.contains("title"));
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Invalid request body".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn test_storage_error_returns_500_without_internal_details() {
    let error = ApiError::storage(
        "Failed to create contact",
        DbError::unavailable("no database connection configured"),
    );

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Failed to create contact" }));
}

#[tokio::test]
async fn test_db_error_conversion_uses_generic_message() {
    let error = ApiError::from(DbError::unavailable("connection refused"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
}

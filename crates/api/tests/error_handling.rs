//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and need no
//! database.

use assert_matches::assert_matches;
use astro_api::error::AppError;
use astro_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_entity_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Scientist",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Scientist not found"}));
}

#[tokio::test]
async fn validation_error_hides_field_detail() {
    let err = AppError::Core(CoreError::Validation("name must be present".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"errors": ["validation errors"]}));
}

#[tokio::test]
async fn bad_request_error_returns_400_with_message() {
    let err = AppError::BadRequest("Expected request with `Content-Type: application/json`".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"][0],
        "Expected request with `Content-Type: application/json`"
    );
}

#[tokio::test]
async fn unknown_entity_returns_404_with_entity_message() {
    let (status, json) = error_to_response(AppError::UnknownEntity("Scientist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Scientist not found"}));
}

#[tokio::test]
async fn other_sqlx_errors_return_500_and_sanitize_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "secret database credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "An internal error occurred"}));
}

#[test]
fn core_errors_convert_into_app_errors() {
    let err: AppError = CoreError::Validation("planet_id must be present".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

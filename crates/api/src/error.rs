use astro_core::error::CoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

/// The single message returned for any validation failure. Field-level
/// detail is logged, not exposed.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the JSON error bodies clients rely on:
/// `{"error": ...}` for lookups and server faults, `{"errors": [...]}` for
/// rejected input.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `astro_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path that cannot name any row of the given entity.
    #[error("Unknown {0}")]
    UnknownEntity(&'static str),

    /// A request that could not be decoded, with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found(entity)
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(detail = %msg, "Validation failed");
                    validation_failed()
                }
            },

            AppError::UnknownEntity(entity) => not_found(entity),

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "errors": [msg] })),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn not_found(entity: &str) -> (StatusCode, Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "error": format!("{entity} not found") }),
    )
}

fn validation_failed() -> (StatusCode, Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "errors": [VALIDATION_ERRORS] }),
    )
}

fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "An internal error occurred" }),
    )
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - Foreign key violations (a mission whose parent vanished between the
///   existence check and the insert) map to 400 like any other validation
///   failure.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                tracing::debug!(
                    constraint = db_err.constraint().unwrap_or("unknown"),
                    "Foreign key violation"
                );
                return validation_failed();
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

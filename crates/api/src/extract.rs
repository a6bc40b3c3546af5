//! Request extractors whose rejections render as [`AppError`] bodies instead
//! of axum's plain-text defaults.

use astro_core::types::DbId;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// JSON request body. Malformed JSON, a missing `Content-Type`, or a field
/// of the wrong type yields a 400 `{"errors": [...]}` response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// The `{id}` segment of a `/scientists/{id}` route.
///
/// A segment that is not an `i64` (`abc`, or a number that overflows) names
/// no scientist, so it is rejected with the same 404 as an unknown id.
#[derive(Debug, Clone, Copy)]
pub struct ScientistId(pub DbId);

impl<S> FromRequestParts<S> for ScientistId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ScientistId(id)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Unresolvable scientist id");
                Err(AppError::UnknownEntity("Scientist"))
            }
        }
    }
}

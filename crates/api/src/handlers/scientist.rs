//! Handlers for the `/scientists` resource.

use astro_core::error::CoreError;
use astro_core::types::DbId;
use astro_db::models::scientist::{CreateScientist, Scientist, ScientistDetail, UpdateScientist};
use astro_db::repositories::{MissionRepo, ScientistRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ScientistId};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Scientist",
        id,
    })
}

/// Verify that a scientist exists, returning the full row.
async fn ensure_scientist_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Scientist> {
    ScientistRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /scientists
///
/// Collection shape: missions are omitted.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Scientist>>> {
    let scientists = ScientistRepo::list(&state.pool).await?;
    tracing::debug!(count = scientists.len(), "Listed scientists");
    Ok(Json(scientists))
}

/// POST /scientists
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateScientist>,
) -> AppResult<(StatusCode, Json<ScientistDetail>)> {
    let input = input.validate()?;
    let scientist = ScientistRepo::create(&state.pool, &input).await?;
    tracing::info!(scientist_id = scientist.id, "Created scientist");

    Ok((
        StatusCode::CREATED,
        Json(ScientistDetail {
            scientist,
            missions: Vec::new(),
        }),
    ))
}

/// GET /scientists/{id}
///
/// Single-item shape: includes the scientist's missions with their planets.
pub async fn get_by_id(
    State(state): State<AppState>,
    ScientistId(id): ScientistId,
) -> AppResult<Json<ScientistDetail>> {
    let scientist = ensure_scientist_exists(&state.pool, id).await?;
    let missions = MissionRepo::list_by_scientist(&state.pool, id).await?;
    Ok(Json(ScientistDetail {
        scientist,
        missions,
    }))
}

/// PATCH /scientists/{id}
///
/// Applies `name` and `field_of_study` when present; other keys are ignored.
/// An unknown id is reported before any problem with the body.
pub async fn update(
    State(state): State<AppState>,
    ScientistId(id): ScientistId,
    body: Result<JsonBody<UpdateScientist>, AppError>,
) -> AppResult<(StatusCode, Json<Scientist>)> {
    let existing = ensure_scientist_exists(&state.pool, id).await?;
    let JsonBody(input) = body?;
    let changes = input.validate()?;

    if changes.is_empty() {
        return Ok((StatusCode::ACCEPTED, Json(existing)));
    }

    let scientist = ScientistRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(scientist_id = id, "Updated scientist");

    Ok((StatusCode::ACCEPTED, Json(scientist)))
}

/// DELETE /scientists/{id}
///
/// Removes the scientist and every mission that references it.
pub async fn delete(
    State(state): State<AppState>,
    ScientistId(id): ScientistId,
) -> AppResult<StatusCode> {
    if ScientistRepo::delete(&state.pool, id).await? {
        tracing::info!(scientist_id = id, "Deleted scientist");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

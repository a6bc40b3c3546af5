//! Handlers for the `/missions` resource.

use astro_core::error::CoreError;
use astro_db::models::mission::{CreateMission, MissionDetail};
use astro_db::repositories::{MissionRepo, PlanetRepo, ScientistRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MissionDetail>>> {
    let missions = MissionRepo::list_details(&state.pool).await?;
    tracing::debug!(count = missions.len(), "Listed missions");
    Ok(Json(missions))
}

/// POST /missions
///
/// Both referenced parents must exist; a dangling reference is a validation
/// failure, not a 404.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMission>,
) -> AppResult<(StatusCode, Json<MissionDetail>)> {
    let input = input.validate()?;

    let scientist = ScientistRepo::find_by_id(&state.pool, input.scientist_id)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!("scientist {} does not exist", input.scientist_id))
        })?;
    let planet = PlanetRepo::find_by_id(&state.pool, input.planet_id)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!("planet {} does not exist", input.planet_id))
        })?;

    let mission = MissionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        mission_id = mission.id,
        scientist_id = mission.scientist_id,
        planet_id = mission.planet_id,
        "Created mission"
    );

    Ok((
        StatusCode::CREATED,
        Json(MissionDetail {
            mission,
            scientist,
            planet,
        }),
    ))
}

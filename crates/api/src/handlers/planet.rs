//! Handlers for the `/planets` resource.

use astro_db::models::planet::Planet;
use astro_db::repositories::PlanetRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /planets
///
/// Collection shape: missions are omitted.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    tracing::debug!(count = planets.len(), "Listed planets");
    Ok(Json(planets))
}

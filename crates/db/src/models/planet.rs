//! Planet entity model and DTOs.

use astro_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table. Planets carry no required fields.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: Option<String>,
    pub distance_from_earth: Option<i32>,
    pub nearest_star: Option<String>,
}

/// DTO for inserting a planet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i32>,
    pub nearest_star: Option<String>,
}

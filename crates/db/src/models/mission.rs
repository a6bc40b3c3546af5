//! Mission entity model, DTOs and nested response shapes.

use astro_core::error::CoreError;
use astro_core::presence::{require_id, require_text};
use astro_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::planet::Planet;
use crate::models::scientist::Scientist;

/// A mission row from the `missions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
}

/// A mission as it appears inside its scientist's detail: the planet is
/// embedded, the scientist back-reference is not.
#[derive(Debug, Clone, Serialize)]
pub struct MissionWithPlanet {
    #[serde(flatten)]
    pub mission: Mission,
    pub planet: Planet,
}

/// A mission with both parents embedded. Neither parent carries its own
/// mission list.
#[derive(Debug, Clone, Serialize)]
pub struct MissionDetail {
    #[serde(flatten)]
    pub mission: Mission,
    pub scientist: Scientist,
    pub planet: Planet,
}

/// Request body for creating a mission. Not yet validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMission {
    pub name: Option<String>,
    pub scientist_id: Option<DbId>,
    pub planet_id: Option<DbId>,
}

/// A mission that passed presence validation.
///
/// The referenced scientist and planet still have to be checked for
/// existence before insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
}

impl CreateMission {
    pub fn validate(self) -> Result<NewMission, CoreError> {
        Ok(NewMission {
            name: require_text("name", self.name)?,
            scientist_id: require_id("scientist_id", self.scientist_id)?,
            planet_id: require_id("planet_id", self.planet_id)?,
        })
    }
}

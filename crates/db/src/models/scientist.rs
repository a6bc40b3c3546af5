//! Scientist entity model and DTOs.

use astro_core::error::CoreError;
use astro_core::presence::{present, require_patched_text, require_text};
use astro_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::mission::MissionWithPlanet;

/// A scientist row from the `scientists` table.
///
/// This is also the collection shape: list and update responses omit the
/// mission list.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Scientist {
    pub id: DbId,
    pub name: String,
    pub field_of_study: String,
}

/// Single-scientist response shape, including its missions.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistDetail {
    #[serde(flatten)]
    pub scientist: Scientist,
    pub missions: Vec<MissionWithPlanet>,
}

/// Request body for creating a scientist. Not yet validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

/// A scientist that passed presence validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScientist {
    pub name: String,
    pub field_of_study: String,
}

impl CreateScientist {
    pub fn validate(self) -> Result<NewScientist, CoreError> {
        Ok(NewScientist {
            name: require_text("name", self.name)?,
            field_of_study: require_text("field_of_study", self.field_of_study)?,
        })
    }
}

/// Request body for patching a scientist.
///
/// Only `name` and `field_of_study` are mutable; any other key in the body
/// is ignored. A key that is present must hold a non-empty string, so
/// `{"name": null}` is rejected rather than treated as "unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScientist {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub field_of_study: Option<Option<String>>,
}

/// Validated field changes for a scientist. `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScientistChanges {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl UpdateScientist {
    pub fn validate(self) -> Result<ScientistChanges, CoreError> {
        Ok(ScientistChanges {
            name: require_patched_text("name", self.name)?,
            field_of_study: require_patched_text("field_of_study", self.field_of_study)?,
        })
    }
}

impl ScientistChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none()
    }
}

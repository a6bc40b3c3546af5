//! Repository for the `missions` table.

use astro_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::mission::{Mission, MissionDetail, MissionWithPlanet, NewMission};
use crate::models::planet::Planet;
use crate::models::scientist::Scientist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, scientist_id, planet_id";

/// Mission columns joined with its planet, aliased to avoid name clashes.
const WITH_PLANET_COLUMNS: &str = "m.id, m.name, m.scientist_id, m.planet_id, \
     p.name AS planet_name, p.distance_from_earth AS planet_distance_from_earth, \
     p.nearest_star AS planet_nearest_star";

#[derive(FromRow)]
struct MissionPlanetRow {
    id: DbId,
    name: String,
    scientist_id: DbId,
    planet_id: DbId,
    planet_name: Option<String>,
    planet_distance_from_earth: Option<i32>,
    planet_nearest_star: Option<String>,
}

impl From<MissionPlanetRow> for MissionWithPlanet {
    fn from(row: MissionPlanetRow) -> Self {
        MissionWithPlanet {
            planet: Planet {
                id: row.planet_id,
                name: row.planet_name,
                distance_from_earth: row.planet_distance_from_earth,
                nearest_star: row.planet_nearest_star,
            },
            mission: Mission {
                id: row.id,
                name: row.name,
                scientist_id: row.scientist_id,
                planet_id: row.planet_id,
            },
        }
    }
}

#[derive(FromRow)]
struct MissionDetailRow {
    #[sqlx(flatten)]
    base: MissionPlanetRow,
    scientist_name: String,
    scientist_field_of_study: String,
}

impl From<MissionDetailRow> for MissionDetail {
    fn from(row: MissionDetailRow) -> Self {
        let scientist = Scientist {
            id: row.base.scientist_id,
            name: row.scientist_name,
            field_of_study: row.scientist_field_of_study,
        };
        let MissionWithPlanet { mission, planet } = row.base.into();
        MissionDetail {
            mission,
            scientist,
            planet,
        }
    }
}

/// Provides CRUD operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a validated mission, returning the created row.
    ///
    /// Fails with a foreign-key violation if either parent no longer exists.
    pub async fn create(pool: &PgPool, input: &NewMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (name, scientist_id, planet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(input.scientist_id)
            .bind(input.planet_id)
            .fetch_one(pool)
            .await
    }

    /// List a scientist's missions, each with its planet embedded.
    pub async fn list_by_scientist(
        pool: &PgPool,
        scientist_id: DbId,
    ) -> Result<Vec<MissionWithPlanet>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PLANET_COLUMNS}
             FROM missions m
             JOIN planets p ON p.id = m.planet_id
             WHERE m.scientist_id = $1
             ORDER BY m.id"
        );
        let rows = sqlx::query_as::<_, MissionPlanetRow>(&query)
            .bind(scientist_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List every mission with its scientist and planet embedded.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<MissionDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PLANET_COLUMNS},
                    s.name AS scientist_name,
                    s.field_of_study AS scientist_field_of_study
             FROM missions m
             JOIN planets p ON p.id = m.planet_id
             JOIN scientists s ON s.id = m.scientist_id
             ORDER BY m.id"
        );
        let rows = sqlx::query_as::<_, MissionDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

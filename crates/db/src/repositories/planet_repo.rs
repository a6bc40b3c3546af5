//! Repository for the `planets` table.

use astro_core::types::DbId;
use sqlx::PgPool;

use crate::models::planet::{CreatePlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, distance_from_earth, nearest_star";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, distance_from_earth, nearest_star)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(input.distance_from_earth)
            .bind(&input.nearest_star)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Permanently delete a planet together with all of its missions.
    ///
    /// Returns `true` if the planet row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let missions = sqlx::query("DELETE FROM missions WHERE planet_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            planet_id = id,
            missions_removed = missions.rows_affected(),
            "Deleted planet"
        );
        Ok(result.rows_affected() > 0)
    }
}

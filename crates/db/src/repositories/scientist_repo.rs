//! Repository for the `scientists` table.

use astro_core::types::DbId;
use sqlx::PgPool;

use crate::models::scientist::{NewScientist, Scientist, ScientistChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, field_of_study";

/// Provides CRUD operations for scientists.
pub struct ScientistRepo;

impl ScientistRepo {
    /// Insert a validated scientist, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewScientist) -> Result<Scientist, sqlx::Error> {
        let query = format!(
            "INSERT INTO scientists (name, field_of_study)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(&input.name)
            .bind(&input.field_of_study)
            .fetch_one(pool)
            .await
    }

    /// Find a scientist by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists WHERE id = $1");
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scientists in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists ORDER BY id");
        sqlx::query_as::<_, Scientist>(&query).fetch_all(pool).await
    }

    /// Update a scientist. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ScientistChanges,
    ) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!(
            "UPDATE scientists SET
                name = COALESCE($2, name),
                field_of_study = COALESCE($3, field_of_study),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.field_of_study)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a scientist together with all of its missions.
    ///
    /// Both deletes run in one transaction. Returns `true` if the scientist
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let missions = sqlx::query("DELETE FROM missions WHERE scientist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM scientists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            scientist_id = id,
            missions_removed = missions.rows_affected(),
            "Deleted scientist"
        );
        Ok(result.rows_affected() > 0)
    }
}

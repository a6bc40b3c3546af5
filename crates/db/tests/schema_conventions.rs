use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    astro_db::health_check(&pool).await.unwrap();

    for table in ["scientists", "planets", "missions"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::text, data_type::text
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 3);
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Both mission foreign keys must cascade on delete.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mission_foreign_keys_cascade(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name::text, delete_rule::text
         FROM information_schema.referential_constraints
         WHERE constraint_schema = 'public'
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = rows.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        [
            "fk_missions_planet_id_planets",
            "fk_missions_scientist_id_scientists"
        ]
    );
    for (name, rule) in &rows {
        assert_eq!(rule, "CASCADE", "{name} should cascade on delete");
    }
}

/// No character varying columns should exist; TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::text, column_name::text
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found varchar columns: {rows:?}");
}

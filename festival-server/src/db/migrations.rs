//! Initial table creation
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each
//! startup. There is no versioned migration history.

use sqlx::PgPool;

/// Create the `festivals` and `performances` tables if they are missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running festival migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS festivals (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            location POINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Performances die with their festival
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS performances (
            id BIGSERIAL PRIMARY KEY,
            festival_id BIGINT NOT NULL REFERENCES festivals(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            genre TEXT NOT NULL,
            start_time TIMESTAMPTZ NOT NULL,
            end_time TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_performances_festival_id ON performances(festival_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Festival migrations complete");
    Ok(())
}

//! Performance repository
//!
//! Every statement is scoped by `festival_id`, so a performance is only
//! reachable through the festival that owns it.

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewPerformance, Performance};

/// Performance repository
pub struct PerformanceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PerformanceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a performance under `festival_id`.
    ///
    /// No existence check first: the foreign key rejects unknown
    /// festivals, and that violation is reported as NotFound.
    pub async fn create(
        &self,
        festival_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO performances (festival_id, name, genre, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, festival_id, name, genre, start_time, end_time
            "#,
        )
        .bind(festival_id)
        .bind(performance.name())
        .bind(performance.genre())
        .bind(performance.start_time())
        .bind(performance.end_time())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                DbError::festival_not_found(festival_id)
            }
            other => DbError::Sqlx(other),
        })
    }

    /// Overwrite a performance's fields.
    ///
    /// Matches on both ids: a performance that exists under another
    /// festival is NotFound here.
    pub async fn update(
        &self,
        festival_id: i64,
        performance_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        sqlx::query_as(
            r#"
            UPDATE performances
            SET name = $3, genre = $4, start_time = $5, end_time = $6
            WHERE id = $1 AND festival_id = $2
            RETURNING id, festival_id, name, genre, start_time, end_time
            "#,
        )
        .bind(performance_id)
        .bind(festival_id)
        .bind(performance.name())
        .bind(performance.genre())
        .bind(performance.start_time())
        .bind(performance.end_time())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::performance_not_found(performance_id))
    }

    /// List a festival's performances ordered by id.
    pub async fn list_for_festival(&self, festival_id: i64) -> Result<Vec<Performance>, DbError> {
        let performances = sqlx::query_as(
            r#"
            SELECT id, festival_id, name, genre, start_time, end_time
            FROM performances
            WHERE festival_id = $1
            ORDER BY id
            "#,
        )
        .bind(festival_id)
        .fetch_all(self.pool)
        .await?;

        Ok(performances)
    }
}

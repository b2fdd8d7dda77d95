//! Festival repository
//!
//! - create: INSERT ... RETURNING (point bound as text, cast in SQL)
//! - get: LEFT JOIN with performances, folded into one record

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use super::DbError;
use crate::models::{Festival, NewFestival, Performance};

/// Festival repository
pub struct FestivalRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FestivalRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a festival and return it with its generated id.
    pub async fn create(&self, festival: NewFestival) -> Result<Festival, DbError> {
        let created: Festival = sqlx::query_as(
            r#"
            INSERT INTO festivals (name, start_date, end_date, location)
            VALUES ($1, $2, $3, $4::text::point)
            RETURNING id, name, start_date, end_date, location::text AS location
            "#,
        )
        .bind(festival.name())
        .bind(festival.start_date())
        .bind(festival.end_date())
        .bind(festival.location())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// List all festivals, without performances, ordered by id.
    pub async fn list(&self) -> Result<Vec<Festival>, DbError> {
        let festivals = sqlx::query_as(
            r#"
            SELECT id, name, start_date, end_date, location::text AS location
            FROM festivals
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(festivals)
    }

    /// Get a festival with its performances.
    ///
    /// Single query: LEFT JOIN yields one row per performance, or one row
    /// with NULL performance columns when there are none.
    pub async fn get(&self, id: i64) -> Result<Festival, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                f.id,
                f.name,
                f.start_date,
                f.end_date,
                f.location::text AS location,
                p.id AS performance_id,
                p.name AS performance_name,
                p.genre,
                p.start_time,
                p.end_time
            FROM festivals f
            LEFT JOIN performances p ON p.festival_id = f.id
            WHERE f.id = $1
            ORDER BY p.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let Some(first) = rows.first() else {
            return Err(DbError::festival_not_found(id));
        };

        let mut festival = Festival {
            id: first.try_get("id")?,
            name: first.try_get("name")?,
            start_date: first.try_get("start_date")?,
            end_date: first.try_get("end_date")?,
            location: first.try_get("location")?,
            performances: None,
        };

        let mut performances = Vec::with_capacity(rows.len());
        for row in &rows {
            let Some(performance_id) = row.try_get::<Option<i64>, _>("performance_id")? else {
                continue;
            };
            performances.push(Performance {
                id: performance_id,
                festival_id: festival.id,
                name: row.try_get("performance_name")?,
                genre: row.try_get("genre")?,
                start_time: row.try_get::<DateTime<Utc>, _>("start_time")?,
                end_time: row.try_get::<DateTime<Utc>, _>("end_time")?,
            });
        }
        festival.performances = Some(performances);

        Ok(festival)
    }

    /// Delete a festival; its performances go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM festivals WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::festival_not_found(id));
        }
        Ok(())
    }
}

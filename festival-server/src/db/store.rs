//! Storage seam between the HTTP layer and a backend
//!
//! Handlers only see `Arc<dyn FestivalStore>`. `PgStore` is the production
//! backend; `MemoryStore` mirrors its observable behaviour for development
//! and tests.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, FestivalRepo, PerformanceRepo};
use crate::models::{Festival, NewFestival, NewPerformance, Performance};

/// Persistence operations for festivals and their performances
#[async_trait]
pub trait FestivalStore: Send + Sync {
    /// Insert a festival; the returned record carries its new id.
    async fn create_festival(&self, festival: NewFestival) -> Result<Festival, DbError>;

    /// All festivals ordered by id, without performances.
    async fn list_festivals(&self) -> Result<Vec<Festival>, DbError>;

    /// One festival with `performances` populated.
    async fn get_festival(&self, id: i64) -> Result<Festival, DbError>;

    /// Delete a festival and, by cascade, its performances.
    async fn delete_festival(&self, id: i64) -> Result<(), DbError>;

    /// Insert a performance owned by `festival_id`.
    async fn create_performance(
        &self,
        festival_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError>;

    /// Replace a performance's fields, only if it belongs to `festival_id`.
    async fn update_performance(
        &self,
        festival_id: i64,
        performance_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError>;

    /// Performances owned by `festival_id`, ordered by id.
    async fn list_performances(&self, festival_id: i64) -> Result<Vec<Performance>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FestivalStore for PgStore {
    async fn create_festival(&self, festival: NewFestival) -> Result<Festival, DbError> {
        FestivalRepo::new(&self.pool).create(festival).await
    }

    async fn list_festivals(&self) -> Result<Vec<Festival>, DbError> {
        FestivalRepo::new(&self.pool).list().await
    }

    async fn get_festival(&self, id: i64) -> Result<Festival, DbError> {
        FestivalRepo::new(&self.pool).get(id).await
    }

    async fn delete_festival(&self, id: i64) -> Result<(), DbError> {
        FestivalRepo::new(&self.pool).delete(id).await
    }

    async fn create_performance(
        &self,
        festival_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        PerformanceRepo::new(&self.pool)
            .create(festival_id, performance)
            .await
    }

    async fn update_performance(
        &self,
        festival_id: i64,
        performance_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        PerformanceRepo::new(&self.pool)
            .update(festival_id, performance_id, performance)
            .await
    }

    async fn list_performances(&self, festival_id: i64) -> Result<Vec<Performance>, DbError> {
        PerformanceRepo::new(&self.pool)
            .list_for_festival(festival_id)
            .await
    }
}

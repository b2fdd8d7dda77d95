//! In-memory store
//!
//! Same observable semantics as `PgStore`: ids count up from 1 per table,
//! deletes cascade, updates are scoped by festival, and creating a
//! performance under an unknown festival is NotFound. Data lives only as
//! long as the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::store::FestivalStore;
use crate::models::{Festival, NewFestival, NewPerformance, Performance};

#[derive(Default)]
struct Tables {
    festivals: BTreeMap<i64, Festival>,
    performances: BTreeMap<i64, Performance>,
    last_festival_id: i64,
    last_performance_id: i64,
}

impl Tables {
    fn performances_of(&self, festival_id: i64) -> Vec<Performance> {
        self.performances
            .values()
            .filter(|p| p.festival_id == festival_id)
            .cloned()
            .collect()
    }
}

/// Process-local store backed by ordered maps
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FestivalStore for MemoryStore {
    async fn create_festival(&self, festival: NewFestival) -> Result<Festival, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_festival_id += 1;
        let created = festival.into_festival(tables.last_festival_id);
        tables.festivals.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_festivals(&self) -> Result<Vec<Festival>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.festivals.values().cloned().collect())
    }

    async fn get_festival(&self, id: i64) -> Result<Festival, DbError> {
        let tables = self.tables.read().await;
        let mut festival = tables
            .festivals
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::festival_not_found(id))?;
        festival.performances = Some(tables.performances_of(id));
        Ok(festival)
    }

    async fn delete_festival(&self, id: i64) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if tables.festivals.remove(&id).is_none() {
            return Err(DbError::festival_not_found(id));
        }
        tables.performances.retain(|_, p| p.festival_id != id);
        Ok(())
    }

    async fn create_performance(
        &self,
        festival_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.festivals.contains_key(&festival_id) {
            return Err(DbError::festival_not_found(festival_id));
        }
        tables.last_performance_id += 1;
        let created = performance.into_performance(tables.last_performance_id, festival_id);
        tables.performances.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_performance(
        &self,
        festival_id: i64,
        performance_id: i64,
        performance: NewPerformance,
    ) -> Result<Performance, DbError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .performances
            .get_mut(&performance_id)
            .filter(|p| p.festival_id == festival_id)
            .ok_or_else(|| DbError::performance_not_found(performance_id))?;
        *slot = performance.into_performance(performance_id, festival_id);
        Ok(slot.clone())
    }

    async fn list_performances(&self, festival_id: i64) -> Result<Vec<Performance>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.performances_of(festival_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn festival(name: &str) -> NewFestival {
        NewFestival::new(
            name,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            Location::new(12.34, 56.78),
        )
        .unwrap()
    }

    fn performance(name: &str) -> NewPerformance {
        NewPerformance::new(
            name,
            "electronic",
            Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 1, 22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn ids_count_up_from_one() {
        let store = MemoryStore::new();
        let a = store.create_festival(festival("a")).await.unwrap();
        let b = store.create_festival(festival("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let listed = store.list_festivals().await.unwrap();
        assert_eq!(listed.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(listed.iter().all(|f| f.performances.is_none()));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.create_festival(festival("a")).await.unwrap();
        store.delete_festival(a.id).await.unwrap();
        let b = store.create_festival(festival("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn delete_cascades_to_performances() {
        let store = MemoryStore::new();
        let f = store.create_festival(festival("a")).await.unwrap();
        store.create_performance(f.id, performance("x")).await.unwrap();
        store.create_performance(f.id, performance("y")).await.unwrap();

        store.delete_festival(f.id).await.unwrap();

        assert!(store.list_performances(f.id).await.unwrap().is_empty());
        assert!(matches!(
            store.get_festival(f.id).await,
            Err(DbError::NotFound { resource: "Festival", .. })
        ));
        assert!(matches!(
            store.delete_festival(f.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn performance_under_unknown_festival_is_not_found() {
        let store = MemoryStore::new();
        let err = store.create_performance(9, performance("x")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Festival", id: 9 }));
    }

    #[tokio::test]
    async fn update_is_scoped_to_owning_festival() {
        let store = MemoryStore::new();
        let owner = store.create_festival(festival("owner")).await.unwrap();
        let other = store.create_festival(festival("other")).await.unwrap();
        let p = store.create_performance(owner.id, performance("x")).await.unwrap();

        let err = store
            .update_performance(other.id, p.id, performance("hijack"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Performance", .. }));

        let updated = store
            .update_performance(owner.id, p.id, performance("renamed"))
            .await
            .unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.festival_id, owner.id);

        let festival = store.get_festival(owner.id).await.unwrap();
        assert_eq!(festival.performances.unwrap()[0].name, "renamed");
    }
}

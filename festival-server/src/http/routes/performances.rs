//! Performance endpoints, always nested under a festival

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{FestivalId, JsonPayload, PerformancePath};
use crate::http::server::AppState;
use crate::models::{NewPerformance, Performance};

/// Create/update performance request
///
/// `id` and `festival_id` in the body are ignored; both come from the path.
#[derive(Debug, Deserialize)]
pub struct PerformanceRequest {
    pub name: String,
    pub genre: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TryFrom<PerformanceRequest> for NewPerformance {
    type Error = ApiError;

    fn try_from(req: PerformanceRequest) -> Result<Self, Self::Error> {
        Ok(NewPerformance::new(
            req.name,
            req.genre,
            req.start_time,
            req.end_time,
        )?)
    }
}

/// POST /festivals/{id}/performances - add a performance
async fn create_performance(
    State(state): State<AppState>,
    FestivalId(festival_id): FestivalId,
    JsonPayload(req): JsonPayload<PerformanceRequest>,
) -> Result<(StatusCode, Json<Performance>), ApiError> {
    let performance = NewPerformance::try_from(req)?;
    let created = state
        .store
        .create_performance(festival_id, performance)
        .await?;
    tracing::info!(festival_id, performance_id = created.id, "performance created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /festivals/{id}/performances/{performance_id} - replace a performance
async fn update_performance(
    State(state): State<AppState>,
    path: PerformancePath,
    JsonPayload(req): JsonPayload<PerformanceRequest>,
) -> Result<Json<Performance>, ApiError> {
    let performance = NewPerformance::try_from(req)?;
    let updated = state
        .store
        .update_performance(path.festival_id, path.performance_id, performance)
        .await?;

    Ok(Json(updated))
}

/// GET /festivals/{id}/performances - list a festival's performances
async fn list_performances(
    State(state): State<AppState>,
    FestivalId(festival_id): FestivalId,
) -> Result<Json<Vec<Performance>>, ApiError> {
    Ok(Json(state.store.list_performances(festival_id).await?))
}

/// Performance routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/festivals/{id}/performances",
            get(list_performances).post(create_performance),
        )
        .route(
            "/festivals/{id}/performances/{performance_id}",
            put(update_performance),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_ids_are_ignored() {
        let req: PerformanceRequest = serde_json::from_str(
            r#"{"id": 5, "festival_id": 77, "name": "Closer", "genre": "techno",
                "start_time": "2025-07-04T23:00:00Z", "end_time": "2025-07-05T01:00:00+01:00"}"#,
        )
        .unwrap();
        let p = NewPerformance::try_from(req).unwrap().into_performance(1, 2);
        assert_eq!(p.festival_id, 2);
        assert_eq!(p.end_time.to_rfc3339(), "2025-07-05T00:00:00+00:00");
    }

    #[test]
    fn missing_genre_fails_to_decode() {
        let req = serde_json::from_str::<PerformanceRequest>(
            r#"{"name": "Closer", "start_time": "2025-07-04T23:00:00Z", "end_time": "2025-07-05T01:00:00Z"}"#,
        );
        assert!(req.is_err());
    }
}

//! Festival endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{FestivalId, JsonPayload};
use crate::http::server::AppState;
use crate::models::dates::calendar_date;
use crate::models::{Festival, Location, NewFestival};

/// Create festival request
///
/// `id` and `performances` may be present but are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateFestivalRequest {
    pub name: String,
    #[serde(deserialize_with = "calendar_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "calendar_date")]
    pub end_date: NaiveDate,
    pub location: Location,
}

impl TryFrom<CreateFestivalRequest> for NewFestival {
    type Error = ApiError;

    fn try_from(req: CreateFestivalRequest) -> Result<Self, Self::Error> {
        Ok(NewFestival::new(
            req.name,
            req.start_date,
            req.end_date,
            req.location,
        )?)
    }
}

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// POST /festivals - create a festival
async fn create_festival(
    State(state): State<AppState>,
    JsonPayload(req): JsonPayload<CreateFestivalRequest>,
) -> Result<(StatusCode, Json<Festival>), ApiError> {
    let festival = NewFestival::try_from(req)?;
    let created = state.store.create_festival(festival).await?;
    tracing::info!(festival_id = created.id, name = %created.name, "festival created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /festivals - list all festivals
async fn list_festivals(State(state): State<AppState>) -> Result<Json<Vec<Festival>>, ApiError> {
    Ok(Json(state.store.list_festivals().await?))
}

/// GET /festivals/{id} - one festival with its performances
async fn get_festival(
    State(state): State<AppState>,
    FestivalId(id): FestivalId,
) -> Result<Json<Festival>, ApiError> {
    Ok(Json(state.store.get_festival(id).await?))
}

/// DELETE /festivals/{id} - delete a festival and its performances
async fn delete_festival(
    State(state): State<AppState>,
    FestivalId(id): FestivalId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete_festival(id).await?;
    tracing::info!(festival_id = id, "festival deleted");

    Ok(Json(DeleteResponse { result: "success" }))
}

/// Festival routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/festivals", get(list_festivals).post(create_festival))
        .route("/festivals/{id}", get(get_festival).delete(delete_festival))
}

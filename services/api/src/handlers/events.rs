//! Event endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use campus_models::{Event, NewEvent};
use campus_storage::Storage;
use campus_utils::{validate_model, ApiError};
use serde::Deserialize;
use uuid::Uuid;

use super::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// `upcoming` or `past`; anything else falls through to the full
    /// listing.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/events?type=upcoming|past
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Json<Vec<Event>> {
    let store = state.store.read().await;
    let events = match query.kind.as_deref() {
        Some("upcoming") => store.upcoming_events(),
        Some("past") => store.past_events(),
        _ => store.events(),
    };
    Json(events)
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let store = state.store.read().await;
    store
        .event_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Event").into())
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    validate_model(&payload)?;
    let mut store = state.store.write().await;
    Ok((StatusCode::CREATED, Json(store.create_event(payload))))
}

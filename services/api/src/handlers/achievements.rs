//! Achievement endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use campus_models::{Achievement, NewAchievement};
use campus_storage::Storage;
use campus_utils::{validate_model, ApiError};
use uuid::Uuid;

use super::AppError;
use crate::AppState;

/// GET /api/achievements
pub async fn list_achievements(State(state): State<AppState>) -> Json<Vec<Achievement>> {
    let store = state.store.read().await;
    Json(store.achievements())
}

/// GET /api/achievements/:id
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Achievement>, AppError> {
    let store = state.store.read().await;
    store
        .achievement_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Achievement").into())
}

/// POST /api/achievements
pub async fn create_achievement(
    State(state): State<AppState>,
    Json(payload): Json<NewAchievement>,
) -> Result<(StatusCode, Json<Achievement>), AppError> {
    validate_model(&payload)?;
    let mut store = state.store.write().await;
    Ok((StatusCode::CREATED, Json(store.create_achievement(payload))))
}

//! Faculty endpoints.

use axum::{
    extract::{Path, State},
    response::Json,
};
use campus_models::FacultyMember;
use campus_storage::Storage;
use campus_utils::ApiError;
use uuid::Uuid;

use super::AppError;
use crate::AppState;

/// GET /api/faculty
pub async fn list_faculty(State(state): State<AppState>) -> Json<Vec<FacultyMember>> {
    let store = state.store.read().await;
    Json(store.faculty())
}

/// GET /api/faculty/:id
pub async fn get_faculty_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FacultyMember>, AppError> {
    let store = state.store.read().await;
    store
        .faculty_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Faculty member").into())
}

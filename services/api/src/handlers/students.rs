//! Student endpoints.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use campus_models::Student;
use campus_storage::Storage;
use campus_utils::ApiError;
use serde::Deserialize;
use uuid::Uuid;

use super::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StudentListQuery {
    pub search: Option<String>,
}

/// GET /api/students?search=query
///
/// With a `search` parameter the listing narrows to students whose name,
/// registration number, or research interest contains the query
/// (case-insensitive). An empty query matches everyone.
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Json<Vec<Student>> {
    let store = state.store.read().await;
    let students = match query.search {
        Some(ref search) => store.search_students(search),
        None => store.students(),
    };
    Json(students)
}

/// GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let store = state.store.read().await;
    store
        .student_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Student").into())
}

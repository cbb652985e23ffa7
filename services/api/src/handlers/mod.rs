//! Route handlers, one module per entity kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use campus_utils::{ApiError, ErrorResponse};

pub mod achievements;
pub mod contact;
pub mod events;
pub mod faculty;
pub mod gallery;
pub mod health;
pub mod students;

/// Newtype over [`ApiError`] so it can be returned straight from
/// handlers as an HTTP response.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

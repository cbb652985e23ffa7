//! Contact-form endpoints.

use axum::{extract::State, http::StatusCode, response::Json};
use campus_models::{ContactMessage, NewContactMessage};
use campus_storage::Storage;
use campus_utils::validate_model;
use serde::Serialize;

use super::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContactSubmissionResponse {
    pub message: String,
    pub data: ContactMessage,
}

/// GET /api/contact-messages
pub async fn list_contact_messages(State(state): State<AppState>) -> Json<Vec<ContactMessage>> {
    let store = state.store.read().await;
    Json(store.contact_messages())
}

/// POST /api/contact
///
/// Validation happens here, before the store sees the payload; the store
/// itself never rejects a message.
pub async fn submit_contact_message(
    State(state): State<AppState>,
    Json(payload): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<ContactSubmissionResponse>), AppError> {
    validate_model(&payload)?;
    let mut store = state.store.write().await;
    let message = store.create_contact_message(payload);
    tracing::info!(id = %message.id, "contact message received");
    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            message: "Message sent successfully".to_string(),
            data: message,
        }),
    ))
}

//! Gallery endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use campus_models::{GalleryCategory, GalleryItem, NewGalleryItem};
use campus_storage::Storage;
use campus_utils::validate_model;
use serde::Deserialize;

use super::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GalleryListQuery {
    pub category: Option<String>,
}

/// GET /api/gallery?category=labs|events|students|achievements
///
/// The category filter is exact-match; a category the gallery does not
/// have yields an empty array rather than an error. An empty `category`
/// value counts as absent and falls through to the full listing.
pub async fn list_gallery_items(
    State(state): State<AppState>,
    Query(query): Query<GalleryListQuery>,
) -> Json<Vec<GalleryItem>> {
    let store = state.store.read().await;
    let items = match query.category.as_deref() {
        Some(raw) if !raw.is_empty() => match raw.parse::<GalleryCategory>() {
            Ok(category) => store.gallery_items_by_category(category),
            Err(_) => Vec::new(),
        },
        _ => store.gallery_items(),
    };
    Json(items)
}

/// POST /api/gallery
pub async fn create_gallery_item(
    State(state): State<AppState>,
    Json(payload): Json<NewGalleryItem>,
) -> Result<(StatusCode, Json<GalleryItem>), AppError> {
    validate_model(&payload)?;
    let mut store = state.store.write().await;
    Ok((StatusCode::CREATED, Json(store.create_gallery_item(payload))))
}

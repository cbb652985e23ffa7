//! Gallery domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Gallery section a photo belongs to. Category filtering is exact-match,
/// never substring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Labs,
    Events,
    Students,
    Achievements,
}

impl FromStr for GalleryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labs" => Ok(Self::Labs),
            "events" => Ok(Self::Events),
            "students" => Ok(Self::Students),
            "achievements" => Ok(Self::Achievements),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Raised when a query names a category the gallery does not have.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown gallery category: {0}")]
pub struct UnknownCategory(pub String);

/// A photo shown on the site gallery page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: GalleryCategory,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a gallery item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub category: GalleryCategory,
}

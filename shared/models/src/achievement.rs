//! Achievement domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Who an achievement is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Student,
    Faculty,
    Department,
}

/// A recognition earned by a student, a faculty member, or the department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub achiever_name: Option<String>,
    pub date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for an achievement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub category: AchievementCategory,
    pub achiever_name: Option<String>,
    pub date: DateTime<Utc>,
    pub image_url: Option<String>,
}

//! Event domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A department event (workshop, competition, seminar, ...).
///
/// Whether an event counts as upcoming or past is decided solely by the
/// stored `is_upcoming` flag, never by comparing `date` to the current
/// time. An event whose date has passed but whose flag is still set
/// remains upcoming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_upcoming: bool,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for an event. `is_upcoming` defaults to true and
/// `current_participants` to 0 when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Event type is required"))]
    pub kind: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_is_upcoming")]
    pub is_upcoming: bool,
    #[validate(range(min = 1, message = "Maximum participants must be positive"))]
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub current_participants: i32,
}

fn default_is_upcoming() -> bool {
    true
}

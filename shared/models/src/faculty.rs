//! Faculty domain models.
//!
//! A faculty member record as served by the public API, plus the insert
//! payload accepted when new members are added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A member of the department faculty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a faculty member. `id` and `createdAt` are assigned
/// by the store; `department` falls back to [`NewFacultyMember::DEFAULT_DEPARTMENT`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFacultyMember {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    #[validate(length(min = 1, message = "Specialization is required"))]
    pub specialization: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl NewFacultyMember {
    /// Department recorded when the payload does not name one.
    pub const DEFAULT_DEPARTMENT: &'static str = "Cybersecurity";
}

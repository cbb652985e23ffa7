//! Student domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An enrolled student.
///
/// `mentor_id` is a soft reference to a [`crate::FacultyMember`] id: the
/// store never checks that the referenced faculty member exists, and a
/// dangling id is legal (the client renders it as "Unknown Mentor").
/// `registration_number` is unique by convention only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub mentor_id: Option<Uuid>,
    pub research_interest: String,
    pub year: i32,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub registration_number: String,
    pub mentor_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Research interest is required"))]
    pub research_interest: String,
    #[validate(range(min = 1, max = 6, message = "Year must be between 1 and 6"))]
    pub year: i32,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
}

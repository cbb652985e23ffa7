//! # Campus Domain Models
//!
//! Core domain models for the cybersecurity department website backend.
//! All models serialize to the camelCase JSON shape the site client
//! expects, and every insert payload carries `validator` rules that are
//! enforced at the API boundary before the store is touched.
//!
//! ## Key Models
//!
//! - **FacultyMember**: a member of the department faculty
//! - **Student**: an enrolled student with a soft mentor reference
//! - **Event**: a workshop, competition, or seminar with an upcoming/past flag
//! - **Achievement**: a recognition attributed to a student, faculty member, or the department
//! - **ContactMessage**: a contact-form submission
//! - **GalleryItem**: a categorized photo for the gallery page
//!
//! ## Insert payloads
//!
//! Each record type has a paired `New*` payload that omits the fields the
//! store assigns (`id`, `createdAt`, and for contact messages `isRead`).
//! Validation lives on the payloads; stored records are never validated
//! again.

pub mod achievement;
pub mod contact;
pub mod event;
pub mod faculty;
pub mod gallery;
pub mod student;

pub use achievement::{Achievement, AchievementCategory, NewAchievement};
pub use contact::{ContactMessage, NewContactMessage};
pub use event::{Event, NewEvent};
pub use faculty::{FacultyMember, NewFacultyMember};
pub use gallery::{GalleryCategory, GalleryItem, NewGalleryItem, UnknownCategory};
pub use student::{NewStudent, Student};

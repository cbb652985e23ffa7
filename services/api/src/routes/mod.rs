use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/faculty", get(faculty::list_faculty))
        .route("/faculty/:id", get(faculty::get_faculty_member))
        .route("/students", get(students::list_students))
        .route("/students/:id", get(students::get_student))
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/:id", get(events::get_event))
        .route(
            "/achievements",
            get(achievements::list_achievements).post(achievements::create_achievement),
        )
        .route("/achievements/:id", get(achievements::get_achievement))
        .route("/contact-messages", get(contact::list_contact_messages))
        .route("/contact", post(contact::submit_contact_message))
        .route(
            "/gallery",
            get(gallery::list_gallery_items).post(gallery::create_gallery_item),
        )
}

//! In-process tests for the HTTP API.
//!
//! Each test drives the full router (middleware included) against a
//! freshly seeded store, without binding a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use campus_api::create_app;
use campus_storage::MemStore;
use campus_utils::AppConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(RwLock::new(MemStore::with_fixtures()));
    create_app(store, &AppConfig::default())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_service_name() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "campus-api");
}

#[tokio::test]
async fn faculty_listing_returns_seeded_roster() {
    let app = app();
    let (status, body) = get(&app, "/api/faculty").await;
    assert_eq!(status, StatusCode::OK);

    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 6);
    // camelCase wire format
    assert!(members[0].get("imageUrl").is_some());
    assert!(members[0].get("createdAt").is_some());
    assert_eq!(members[0]["name"], "Dr. Alex Morgan");
}

#[tokio::test]
async fn faculty_lookup_by_id_round_trips() {
    let app = app();
    let (_, body) = get(&app, "/api/faculty").await;
    let id = body[0]["id"].as_str().unwrap().to_string();

    let (status, member) = get(&app, &format!("/api/faculty/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["id"], id.as_str());
}

#[tokio::test]
async fn unknown_faculty_id_is_404() {
    let app = app();
    let (status, body) = get(
        &app,
        "/api/faculty/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_is_rejected_before_lookup() {
    let app = app();
    let (status, _) = get(&app, "/api/students/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn student_search_narrows_the_listing() {
    let app = app();
    let (_, all) = get(&app, "/api/students").await;
    assert_eq!(all.as_array().unwrap().len(), 28);

    let (status, hits) = get(&app, "/api/students?search=forensics").await;
    assert_eq!(status, StatusCode::OK);
    let hits = hits.as_array().unwrap();
    assert!(!hits.is_empty());
    assert!(hits.len() < 28);
    assert!(hits.iter().all(|s| {
        s["researchInterest"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("forensics")
    }));
}

#[tokio::test]
async fn empty_search_returns_everyone() {
    let app = app();
    let (status, hits) = get(&app, "/api/students?search=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 28);
}

#[tokio::test]
async fn event_type_filter_partitions_by_stored_flag() {
    let app = app();
    let (_, all) = get(&app, "/api/events").await;
    let (_, upcoming) = get(&app, "/api/events?type=upcoming").await;
    let (_, past) = get(&app, "/api/events?type=past").await;

    let all = all.as_array().unwrap();
    let upcoming = upcoming.as_array().unwrap();
    let past = past.as_array().unwrap();

    assert_eq!(upcoming.len() + past.len(), all.len());
    assert!(upcoming.iter().all(|e| e["isUpcoming"] == json!(true)));
    assert!(past.iter().all(|e| e["isUpcoming"] == json!(false)));

    // Upcoming sorted soonest first, past most recent first.
    let dates: Vec<&str> = upcoming.iter().map(|e| e["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn unknown_event_type_falls_through_to_full_listing() {
    let app = app();
    let (status, body) = get(&app, "/api/events?type=banana").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn created_event_is_retrievable() {
    let app = app();
    let (status, created) = post(
        &app,
        "/api/events",
        json!({
            "title": "Lockpicking 101",
            "description": "Physical security basics",
            "type": "Workshop",
            "date": "2026-11-05T14:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isUpcoming"], json!(true));
    assert_eq!(created["currentParticipants"], json!(0));

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/events/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Lockpicking 101");
}

#[tokio::test]
async fn invalid_event_payload_is_400() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/events",
        json!({
            "title": "",
            "description": "Missing a title",
            "type": "Workshop",
            "date": "2026-11-05T14:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn achievements_listed_most_recent_first() {
    let app = app();
    let (status, body) = get(&app, "/api/achievements").await;
    assert_eq!(status, StatusCode::OK);

    let achievements = body.as_array().unwrap();
    assert_eq!(achievements.len(), 4);
    let dates: Vec<&str> = achievements
        .iter()
        .map(|a| a["date"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn contact_submission_round_trips_and_starts_unread() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/contact",
        json!({
            "name": "Prospective Student",
            "email": "prospect@example.com",
            "subject": "Admissions",
            "message": "How do I apply?"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Message sent successfully");
    assert_eq!(body["data"]["isRead"], json!(false));

    let (_, messages) = get(&app, "/api/contact-messages").await;
    assert_eq!(messages.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn contact_with_empty_name_never_reaches_the_store() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/contact",
        json!({
            "name": "",
            "email": "prospect@example.com",
            "subject": "Admissions",
            "message": "How do I apply?"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, messages) = get(&app, "/api/contact-messages").await;
    assert!(messages.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn gallery_category_filter_is_exact() {
    let app = app();
    let (status, labs) = get(&app, "/api/gallery?category=labs").await;
    assert_eq!(status, StatusCode::OK);
    let labs = labs.as_array().unwrap();
    assert_eq!(labs.len(), 2);
    assert!(labs.iter().all(|i| i["category"] == "labs"));

    // Substring of a category is not a match.
    let (status, body) = get(&app, "/api/gallery?category=lab").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_category_falls_through_to_full_gallery() {
    let app = app();
    let (status, body) = get(&app, "/api/gallery?category=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn dangling_mentor_reference_is_accepted_downstream() {
    let app = app();
    let (_, students) = get(&app, "/api/students").await;
    let mentor_id = students[0]["mentorId"].as_str().unwrap().to_string();

    // Seeded mentors resolve against the faculty listing.
    let (status, _) = get(&app, &format!("/api/faculty/{mentor_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

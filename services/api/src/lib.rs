//! HTTP service for the department website.
//!
//! Exposes the REST API consumed by the single-page site: faculty,
//! students, events, achievements, gallery, and the contact form. All
//! data comes from the in-memory [`campus_storage::MemStore`] injected
//! through [`AppState`].

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    Router,
};
use campus_storage::MemStore;
use campus_utils::AppConfig;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod handlers;
pub mod middleware;
pub mod routes;

use middleware::request_id_middleware;

/// Shared handler state. The store is the process-wide repository
/// instance, owned here and nowhere else.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MemStore>>,
    pub config: AppConfig,
}

/// Builds the application router with the full middleware stack.
pub fn create_app(store: Arc<RwLock<MemStore>>, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", routes::create_api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(AppState {
            store,
            config: config.clone(),
        })
}

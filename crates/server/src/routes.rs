use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{
    admin::AdminService,
    expiry::ExpiryPolicy,
    file::{config_store::ConfigStore, grade_store::GradeStore},
    lookup::LookupService,
    status::StatusService,
};

pub mod admin;
pub mod search;
pub mod status;

/// Shared handler state: the three services, each holding the injected
/// stores rather than reaching for process-wide globals.
#[derive(Clone)]
pub struct ServerState {
    pub lookup: LookupService,
    pub admin: AdminService,
    pub status: StatusService,
    pub expiry: ExpiryPolicy,
}

impl ServerState {
    pub fn new(config_store: Arc<dyn ConfigStore>, grade_store: Arc<dyn GradeStore>) -> Self {
        Self {
            lookup: LookupService::new(config_store.clone(), grade_store.clone()),
            admin: AdminService::new(config_store.clone()),
            status: StatusService::new(config_store.clone(), grade_store),
            expiry: ExpiryPolicy::new(config_store),
        }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static pages, the lookup/admin/status
/// APIs, and the request tracing + CORS layers.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let static_pages = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let pages = Router::new()
        .route_service("/admin", ServeFile::new("frontend/admin.html"))
        .route("/health", get(health));

    let api = Router::new()
        .route("/api/search", post(search::search))
        .route("/api/admin/set-expiry", post(admin::set_expiry))
        .route("/api/status", get(status::status));

    pages
        .merge(api)
        .with_state(state)
        .fallback_service(static_pages)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

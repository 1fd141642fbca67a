use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::auth::AuthService;
use service::catalog::{CatalogService, FeaturedPolicy};
use service::credentials::CredentialService;
use service::store::Store;

use crate::openapi::ApiDoc;

pub mod auth;
pub mod catalog;

/// Shared handler state. Everything reaches the store through the injected
/// `Store` handle; there is no global state.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
    pub auth: Arc<AuthService>,
}

impl ServerState {
    pub fn new(store: Arc<dyn Store>, credentials: CredentialService, featured: FeaturedPolicy) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(Arc::clone(&store), featured)),
            auth: Arc::new(AuthService::new(store, credentials)),
        }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Request span at INFO; arrival at DEBUG; status and latency at INFO; 5xx at ERROR.
fn http_trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/locations", get(catalog::locations))
        .route("/appliances", get(catalog::appliances))
        .route("/featured-technicians", get(catalog::featured_technicians))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .with_state(state)
        .layer(cors)
        .layer(http_trace())
}

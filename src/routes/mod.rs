use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    services::providers::CatalogProvider,
};

pub mod corpus;
pub mod games;
pub mod recommendations;

/// Shared application state
pub struct AppState {
    pub catalog_provider: Arc<dyn CatalogProvider>,
    /// Catalog endpoint segment queried for lookups
    pub endpoint: String,
}

impl AppState {
    pub fn new(catalog_provider: Arc<dyn CatalogProvider>, endpoint: impl Into<String>) -> Self {
        Self {
            catalog_provider,
            endpoint: endpoint.into(),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games/lookup", get(games::lookup))
        .route("/corpus/remap", post(corpus::remap))
        .route("/corpus/companies", post(corpus::companies))
        .route("/corpus/subsidiaries", post(corpus::subsidiaries))
        .route("/recommendations", post(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`; CORS is permissive so browser
//! dashboards on other origins can read the analytics endpoints.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over a shared engine.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::classify))
        .route("/feedback", post(endpoints::feedback::submit))
        .route("/analytics/syndromes", get(endpoints::analytics::syndromes))
        .route("/analytics/outbreaks", get(endpoints::analytics::outbreaks))
        .route("/analytics/feedback", get(endpoints::analytics::feedback))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}

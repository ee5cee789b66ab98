//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub languages_supported: Vec<&'static str>,
}

/// `GET /api/health`: liveness plus the accepted language codes.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        languages_supported: config::supported_languages(),
    })
}

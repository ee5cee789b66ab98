//! Report intake endpoint.
//!
//! `POST /api/chat`: classify one transcribed symptom report and feed the
//! surveillance stores. The response is the full `ClassificationResult`;
//! its `id` is the reference a health worker cites when giving feedback.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::ClassificationResult;

/// Longest accepted report, in characters.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: Option<String>,
    pub location: Option<ReportLocation>,
}

/// Where the report came from. Only `district` feeds aggregation;
/// coordinates are accepted for clients that send them.
#[derive(Deserialize, Default)]
pub struct ReportLocation {
    pub district: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// `POST /api/chat`: classify a symptom report.
pub async fn classify(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ClassificationResult>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }
    if req.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }

    let language = req.language.as_deref().unwrap_or("en");
    let location = req.location.unwrap_or_default();
    if location.lat.is_some() || location.lng.is_some() {
        tracing::debug!(lat = ?location.lat, lng = ?location.lng, "Report carries coordinates");
    }

    let result = ctx
        .core
        .classify(&req.message, language, location.district.as_deref());

    Ok(Json(result))
}

//! Health worker feedback endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::surveillance::{parse_rating, FeedbackRecord};

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub classification_ref: String,
    /// Integer or free text ("4"); anything else is an invalid rating.
    pub rating: Value,
    pub correction: Option<String>,
    pub reviewer_id: Option<String>,
}

/// `POST /api/feedback`: append one feedback record.
///
/// Invalid ratings are rejected with `INVALID_RATING` and nothing is logged.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackRecord>, ApiError> {
    let classification_ref = Uuid::parse_str(req.classification_ref.trim())
        .map_err(|_| ApiError::BadRequest("classification_ref must be a UUID".into()))?;
    let rating = rating_from_json(&req.rating)?;

    let record = ctx.core.submit_feedback(
        classification_ref,
        rating,
        req.correction.as_deref(),
        req.reviewer_id.as_deref(),
    )?;

    Ok(Json(record))
}

fn rating_from_json(value: &Value) -> Result<i64, ApiError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ApiError::InvalidRating(n.to_string())),
        Value::String(s) => Ok(i64::from(parse_rating(s)?)),
        other => Err(ApiError::InvalidRating(other.to_string())),
    }
}

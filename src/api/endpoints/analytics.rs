//! Surveillance dashboard endpoints.
//!
//! Three endpoints:
//! - `GET /api/analytics/syndromes`: syndrome aggregates
//! - `GET /api/analytics/outbreaks`: outbreak clusters plus summary
//! - `GET /api/analytics/feedback`: feedback log plus summary

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::surveillance::{
    FeedbackRecord, FeedbackSummary, OutbreakCluster, OutbreakSummary, SyndromeAggregate,
};

#[derive(Serialize)]
pub struct SyndromesResponse {
    pub syndromes: Vec<SyndromeAggregate>,
}

#[derive(Serialize)]
pub struct OutbreaksResponse {
    pub clusters: Vec<OutbreakCluster>,
    #[serde(flatten)]
    pub summary: OutbreakSummary,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    #[serde(flatten)]
    pub summary: FeedbackSummary,
    pub feedback: Vec<FeedbackRecord>,
}

/// `GET /api/analytics/syndromes`
pub async fn syndromes(
    State(ctx): State<ApiContext>,
) -> Result<Json<SyndromesResponse>, ApiError> {
    let syndromes = ctx.core.list_syndrome_aggregates()?;
    Ok(Json(SyndromesResponse { syndromes }))
}

/// `GET /api/analytics/outbreaks`
pub async fn outbreaks(
    State(ctx): State<ApiContext>,
) -> Result<Json<OutbreaksResponse>, ApiError> {
    let (clusters, summary) = ctx.core.outbreak_snapshot()?;
    Ok(Json(OutbreaksResponse { clusters, summary }))
}

/// `GET /api/analytics/feedback`
pub async fn feedback(
    State(ctx): State<ApiContext>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let (feedback, summary) = ctx.core.feedback_snapshot()?;
    Ok(Json(FeedbackResponse { summary, feedback }))
}

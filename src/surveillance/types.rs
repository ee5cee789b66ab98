use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ClassificationRef, ClusterSeverity, FeedbackStatus, SymptomSet};

// ---------------------------------------------------------------------------
// SyndromeAggregate
// ---------------------------------------------------------------------------

/// Running count of one syndrome label. Never evicted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyndromeAggregate {
    pub name: String,
    /// Pattern of the latest observation.
    pub symptoms: SymptomSet,
    pub count: u64,
    /// Location of the latest observation.
    pub location_label: String,
    /// Distinct locations, in the order first seen.
    pub locations: Vec<String>,
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// OutbreakCluster
// ---------------------------------------------------------------------------

/// Reports sharing a location and an identical symptom combination.
///
/// There is no time window: a report from a year ago and one from today
/// land in the same cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutbreakCluster {
    pub id: u64,
    pub location_label: String,
    pub symptoms: SymptomSet,
    /// Canonical key of `symptoms`.
    pub signature: String,
    pub count: u64,
    pub severity: ClusterSeverity,
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
}

/// Counts for the outbreak dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutbreakSummary {
    pub total_clusters: usize,
    pub high_severity_clusters: usize,
}

// ---------------------------------------------------------------------------
// FeedbackRecord
// ---------------------------------------------------------------------------

/// A health worker's rating of an earlier classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u64,
    pub classification_ref: ClassificationRef,
    pub rating: u8,
    pub correction: Option<String>,
    pub reviewer_id: Option<String>,
    pub status: FeedbackStatus,
    /// Low ratings (below 3) are what the retraining consumer picks up first.
    pub queued_for_retraining: bool,
    pub submitted_at: NaiveDateTime,
}

/// Counts for the feedback dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackSummary {
    pub total_feedback: usize,
    pub pending_review: usize,
    pub queued_for_retraining: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SurveillanceError {
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Rating must be an integer between 1 and 5, got {0:?}")]
    InvalidRating(String),
    #[error("Feedback log lock poisoned")]
    LockPoisoned,
}

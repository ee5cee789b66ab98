use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Language, SourceTag};
use super::symptom::SymptomSet;

/// Opaque handle a feedback record uses to point back at a classification.
pub type ClassificationRef = Uuid;

/// Outcome of classifying one message. Created fresh per message and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub id: ClassificationRef,
    pub detected_symptoms: SymptomSet,
    pub response_text: String,
    pub confidence_score: f32,
    pub source_tag: SourceTag,
    pub emergency: bool,
    pub syndrome: Option<String>,
    pub location_label: String,
    pub language: Language,
    /// Canonical key of the knowledge entry used, if any.
    pub matched_key: Option<String>,
    pub classified_at: NaiveDateTime,
}

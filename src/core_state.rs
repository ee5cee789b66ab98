//! Transport-agnostic engine state.
//!
//! `CoreState` owns the knowledge base, the two surveillance stores, the
//! feedback log and the classifier wired to them. It is built once at
//! startup, wrapped in `Arc`, and shared by every transport (the HTTP
//! service, tests).

use std::sync::Arc;

use crate::config::{self, EngineConfig};
use crate::models::{ClassificationRef, ClassificationResult, Language};
use crate::surveillance::{
    FeedbackError, FeedbackLog, FeedbackRecord, FeedbackSummary, OutbreakCluster,
    OutbreakDetector, OutbreakSummary, SurveillanceError, SyndromeAggregate, SyndromeRegistry,
};
use crate::triage::{KnowledgeBase, SymptomClassifier};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    config: EngineConfig,
    classifier: SymptomClassifier,
    syndromes: Arc<SyndromeRegistry>,
    outbreaks: Arc<OutbreakDetector>,
    feedback: FeedbackLog,
}

impl CoreState {
    /// Engine with default configuration and the built-in knowledge base.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_knowledge(config, KnowledgeBase::builtin())
    }

    /// Engine backed by an explicit knowledge base.
    pub fn with_knowledge(config: EngineConfig, knowledge: KnowledgeBase) -> Self {
        tracing::debug!(
            entries = knowledge.len(),
            outbreak_threshold = config.outbreak_high_threshold,
            "Engine initialized"
        );
        let syndromes = Arc::new(SyndromeRegistry::new());
        let outbreaks = Arc::new(OutbreakDetector::new(config.outbreak_high_threshold));
        let classifier = SymptomClassifier::new(
            Arc::new(knowledge),
            Arc::clone(&syndromes),
            Arc::clone(&outbreaks),
        );
        Self {
            config,
            classifier,
            syndromes,
            outbreaks,
            feedback: FeedbackLog::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Classification ──────────────────────────────────────

    /// Classify a transcribed report. Unknown language codes resolve to
    /// English; a blank or missing location uses the configured default.
    pub fn classify(
        &self,
        text: &str,
        language_code: &str,
        location: Option<&str>,
    ) -> ClassificationResult {
        let language = Language::resolve(language_code);
        let location_label =
            config::resolve_location_label(location, &self.config.default_location);
        self.classifier.classify(text, language, &location_label)
    }

    // ── Feedback ────────────────────────────────────────────

    pub fn submit_feedback(
        &self,
        classification_ref: ClassificationRef,
        rating: i64,
        correction: Option<&str>,
        reviewer_id: Option<&str>,
    ) -> Result<FeedbackRecord, CoreError> {
        Ok(self
            .feedback
            .submit(classification_ref, rating, correction, reviewer_id)?)
    }

    pub fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, CoreError> {
        Ok(self.feedback.list()?)
    }

    /// Feedback records with their summary, consistent with each other.
    pub fn feedback_snapshot(
        &self,
    ) -> Result<(Vec<FeedbackRecord>, FeedbackSummary), CoreError> {
        Ok(self.feedback.snapshot()?)
    }

    // ── Surveillance reads ──────────────────────────────────

    pub fn list_syndrome_aggregates(&self) -> Result<Vec<SyndromeAggregate>, CoreError> {
        Ok(self.syndromes.list()?)
    }

    pub fn list_outbreak_clusters(&self) -> Result<Vec<OutbreakCluster>, CoreError> {
        Ok(self.outbreaks.list()?)
    }

    /// Outbreak clusters with their summary, consistent with each other.
    pub fn outbreak_snapshot(
        &self,
    ) -> Result<(Vec<OutbreakCluster>, OutbreakSummary), CoreError> {
        Ok(self.outbreaks.snapshot()?)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Surveillance(#[from] SurveillanceError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{ClusterSeverity, SourceTag};

    #[test]
    fn dengue_reports_accumulate() {
        let state = CoreState::new();

        let first = state.classify("I have fever and rash", "en", Some("Mysuru"));
        assert_eq!(first.source_tag, SourceTag::Retrieval);
        let aggregates = state.list_syndrome_aggregates().unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].name, "Dengue-like Syndrome");
        assert_eq!(aggregates[0].count, 1);

        state.classify("rash, fever since two days", "en", Some("Mysuru"));
        let aggregates = state.list_syndrome_aggregates().unwrap();
        assert_eq!(aggregates[0].count, 2);

        let clusters = state.list_outbreak_clusters().unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count, 2);
        assert_eq!(clusters[0].location_label, "Mysuru");
    }

    #[test]
    fn emergency_report_touches_no_store() {
        let state = CoreState::new();
        let result = state.classify("chest pain", "en", Some("Mysuru"));

        assert_eq!(result.source_tag, SourceTag::RuleOverride);
        assert!(state.list_syndrome_aggregates().unwrap().is_empty());
        assert!(state.list_outbreak_clusters().unwrap().is_empty());
    }

    #[test]
    fn fever_with_chest_pain_is_an_override() {
        let state = CoreState::new();
        let result = state.classify("fever and chest pain", "en", None);
        assert_eq!(result.source_tag, SourceTag::RuleOverride);
        assert!(result.emergency);
    }

    #[test]
    fn unrecognized_text_falls_back() {
        let state = CoreState::new();
        let result = state.classify("I feel tired", "en", None);
        assert_eq!(result.source_tag, SourceTag::Fallback);
        assert!((result.confidence_score - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_location_uses_configured_default() {
        let state = CoreState::with_config(EngineConfig {
            default_location: "Kolar".into(),
            outbreak_high_threshold: 5,
        });
        let result = state.classify("fever", "en", Some("  "));
        assert_eq!(result.location_label, "Kolar");
        assert_eq!(state.list_outbreak_clusters().unwrap()[0].location_label, "Kolar");

        let result = CoreState::new().classify("fever", "en", None);
        assert_eq!(result.location_label, "Unknown");
    }

    #[test]
    fn config_reflects_construction() {
        let state = CoreState::with_config(EngineConfig {
            default_location: "Tumakuru".into(),
            outbreak_high_threshold: 2,
        });
        assert_eq!(state.config().default_location, "Tumakuru");
        assert_eq!(state.config().outbreak_high_threshold, 2);
        assert_eq!(CoreState::new().config().default_location, "Unknown");
    }

    #[test]
    fn hindi_fever_report_gets_hindi_advice() {
        let state = CoreState::new();
        let result = state.classify("मुझे बुखार है", "hi", Some("Patna"));

        assert_eq!(result.language, Language::Hindi);
        assert_eq!(result.source_tag, SourceTag::Retrieval);
        assert!(result.response_text.contains("अच्छी तरह आराम करें"));
        assert!(result.response_text.contains("Primary Health Center, Patna"));
    }

    #[test]
    fn unknown_language_code_resolves_to_english() {
        let state = CoreState::new();
        let result = state.classify("fever and rash", "fr", None);
        assert_eq!(result.language, Language::English);
        assert_eq!(result.source_tag, SourceTag::Retrieval);
    }

    #[test]
    fn configured_threshold_drives_escalation() {
        let state = CoreState::with_config(EngineConfig {
            default_location: "Unknown".into(),
            outbreak_high_threshold: 1,
        });
        state.classify("vomiting and diarrhea", "en", Some("Hubballi"));
        state.classify("diarrhea, vomiting", "en", Some("Hubballi"));

        let clusters = state.list_outbreak_clusters().unwrap();
        assert_eq!(clusters[0].severity, ClusterSeverity::High);
        let (snapshot, summary) = state.outbreak_snapshot().unwrap();
        assert_eq!(snapshot.len(), clusters.len());
        assert_eq!(summary.high_severity_clusters, 1);
    }

    #[test]
    fn invalid_feedback_leaves_state_untouched() {
        let state = CoreState::new();
        let result = state.classify("fever and rash", "en", Some("Mysuru"));

        let err = state.submit_feedback(result.id, 6, Some(""), None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Feedback(FeedbackError::InvalidRating(_))
        ));
        assert!(state.list_feedback().unwrap().is_empty());
        assert_eq!(state.list_syndrome_aggregates().unwrap()[0].count, 1);

        // Classification still works afterwards.
        state.classify("fever and rash", "en", Some("Mysuru"));
        assert_eq!(state.list_syndrome_aggregates().unwrap()[0].count, 2);
    }

    #[test]
    fn feedback_is_logged_against_the_result() {
        let state = CoreState::new();
        let result = state.classify("cough", "en", None);

        let record = state
            .submit_feedback(result.id, 2, Some("Likely TB, refer"), Some("asha-3"))
            .unwrap();
        assert_eq!(record.classification_ref, result.id);
        assert!(record.queued_for_retraining);

        let (records, summary) = state.feedback_snapshot().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, record.id);
        assert_eq!(summary.total_feedback, 1);
        assert_eq!(summary.queued_for_retraining, 1);
    }

    #[test]
    fn feedback_is_not_checked_against_known_results() {
        let state = CoreState::new();
        assert!(state.submit_feedback(Uuid::new_v4(), 4, None, None).is_ok());
    }
}

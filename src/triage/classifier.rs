//! Classifier: normalized symptoms → three-tier decision policy.
//!
//! Tiers, first match wins:
//! 1. Rule override: any emergency token present. Bypasses the knowledge base.
//! 2. Retrieval: exact canonical key, then the first detected token alone.
//! 3. Fallback: nothing usable detected.
//!
//! Only a retrieval hit notifies the surveillance stores. Classification
//! itself never fails; a store failure is logged and the result returned.

use std::sync::Arc;

use uuid::Uuid;

use super::knowledge::{KnowledgeBase, KnowledgeEntry};
use super::messages;
use super::normalize::normalize;
use crate::models::{ClassificationResult, Language, SourceTag, SymptomSet};
use crate::surveillance::{OutbreakDetector, SyndromeRegistry};

pub struct SymptomClassifier {
    knowledge: Arc<KnowledgeBase>,
    syndromes: Arc<SyndromeRegistry>,
    outbreaks: Arc<OutbreakDetector>,
}

impl SymptomClassifier {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        syndromes: Arc<SyndromeRegistry>,
        outbreaks: Arc<OutbreakDetector>,
    ) -> Self {
        Self {
            knowledge,
            syndromes,
            outbreaks,
        }
    }

    /// Classify one already-transcribed message.
    pub fn classify(
        &self,
        text: &str,
        language: Language,
        location_label: &str,
    ) -> ClassificationResult {
        let detected = normalize(text, language);

        if detected.has_emergency() {
            tracing::info!(
                symptoms = %detected.canonical_key(),
                location = location_label,
                "Emergency override"
            );
            let response = messages::emergency_response(language, &detected);
            return build_result(
                detected,
                response,
                SourceTag::RuleOverride,
                true,
                None,
                None,
                language,
                location_label,
            );
        }

        if let Some((key, entry)) = self.retrieve(&detected) {
            tracing::debug!(
                symptoms = %detected.canonical_key(),
                detected = detected.len(),
                matched = %key,
                location = location_label,
                "Knowledge base hit"
            );
            self.notify_surveillance(&detected, entry, location_label);

            let response = messages::retrieval_response(&detected, entry, language, location_label);
            return build_result(
                detected,
                response,
                SourceTag::Retrieval,
                entry.emergency,
                entry.syndrome.clone(),
                Some(key),
                language,
                location_label,
            );
        }

        tracing::debug!(
            symptoms = %detected.canonical_key(),
            location = location_label,
            "No usable symptoms, asking for clarification"
        );
        build_result(
            detected,
            messages::fallback_response(language),
            SourceTag::Fallback,
            false,
            None,
            None,
            language,
            location_label,
        )
    }

    /// Exact key first, then the first detected token alone.
    fn retrieve(&self, detected: &SymptomSet) -> Option<(String, &KnowledgeEntry)> {
        if detected.is_empty() {
            return None;
        }

        if let Some(entry) = self.knowledge.lookup(detected) {
            return Some((detected.canonical_key(), entry));
        }

        let first = detected.first()?;
        let single = SymptomSet::from([first]);
        let key = single.canonical_key();
        self.knowledge.get(&key).map(|entry| (key, entry))
    }

    fn notify_surveillance(
        &self,
        detected: &SymptomSet,
        entry: &KnowledgeEntry,
        location_label: &str,
    ) {
        if let Some(syndrome) = &entry.syndrome {
            if let Err(e) = self.syndromes.record(syndrome, detected, location_label) {
                tracing::warn!(error = %e, syndrome = %syndrome, "Syndrome not recorded");
            }
        }
        if let Err(e) = self.outbreaks.record(detected, location_label) {
            tracing::warn!(error = %e, "Outbreak cluster not recorded");
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_result(
    detected: SymptomSet,
    response_text: String,
    source_tag: SourceTag,
    emergency: bool,
    syndrome: Option<String>,
    matched_key: Option<String>,
    language: Language,
    location_label: &str,
) -> ClassificationResult {
    ClassificationResult {
        id: Uuid::new_v4(),
        detected_symptoms: detected,
        response_text,
        confidence_score: source_tag.confidence_score(),
        source_tag,
        emergency,
        syndrome,
        location_label: location_label.to_string(),
        language,
        matched_key,
        classified_at: chrono::Local::now().naive_local(),
    }
}

//! Normalizer: raw, possibly multilingual text → canonical symptom set.
//!
//! Pure function of its inputs and the static alias/vocabulary tables.
//! Matching is substring containment over the lower-cased text, not
//! tokenization.

use std::sync::LazyLock;

use regex::Regex;

use super::aliases;
use crate::models::{Language, Symptom, SymptomSet};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Detect the vocabulary tokens present in `raw`.
///
/// Returns an empty set when nothing matches.
pub fn normalize(raw: &str, language: Language) -> SymptomSet {
    let mut text = resolve_aliases(&fold(raw), language);
    let mut detected = SymptomSet::new();

    for symptom in Symptom::SCAN_ORDER {
        let surface = symptom.as_str();
        if text.contains(surface) {
            detected.insert(symptom);
            // Consume the phrase so "chest pain" does not also yield "pain".
            text = text.replace(surface, " ");
        }
    }

    detected
}

/// Lower-case and collapse whitespace runs to a single space.
fn fold(raw: &str) -> String {
    WHITESPACE.replace_all(&raw.to_lowercase(), " ").into_owned()
}

/// Rewrite known spellings for `language` (and English) into canonical
/// surface forms, longest spelling first.
fn resolve_aliases(text: &str, language: Language) -> String {
    let mut resolved = text.to_string();
    for (spelling, symptom) in aliases::resolution_order(language) {
        if resolved.contains(spelling) {
            resolved = resolved.replace(spelling, &format!(" {} ", symptom.as_str()));
        }
    }
    resolved
}

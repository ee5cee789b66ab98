use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::enums::str_enum;

/// Separator used when joining a symptom set into its canonical key.
pub const KEY_SEPARATOR: char = '+';

str_enum!(
    /// One token of the closed symptom vocabulary. The string form is the
    /// canonical English surface form matched against normalized text.
    Symptom {
        ChestPain => "chest pain",
        Cough => "cough",
        Diarrhea => "diarrhea",
        DifficultyBreathing => "difficulty breathing",
        Fever => "fever",
        Headache => "headache",
        Pain => "pain",
        Rash => "rash",
        SevereBleeding => "severe bleeding",
        Unconscious => "unconscious",
        Vomiting => "vomiting",
    }
);

impl Symptom {
    /// Vocabulary in scan order: multi-word phrases first, so a phrase is
    /// claimed before any of its constituent words.
    pub const SCAN_ORDER: [Symptom; 11] = [
        Symptom::ChestPain,
        Symptom::DifficultyBreathing,
        Symptom::SevereBleeding,
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Rash,
        Symptom::Headache,
        Symptom::Pain,
        Symptom::Unconscious,
        Symptom::Vomiting,
        Symptom::Diarrhea,
    ];

    /// Tokens that unconditionally trigger the rule override tier.
    pub const EMERGENCY: [Symptom; 4] = [
        Symptom::ChestPain,
        Symptom::DifficultyBreathing,
        Symptom::SevereBleeding,
        Symptom::Unconscious,
    ];

    pub fn is_emergency(&self) -> bool {
        Self::EMERGENCY.contains(self)
    }
}

// Ordering follows the surface form so that set iteration order is the
// lexicographic order the canonical key requires.
impl Ord for Symptom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Symptom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A set of symptom tokens. Iteration is always in canonical order, and two
/// sets are equal exactly when their canonical keys are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSet(BTreeSet<Symptom>);

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.0.insert(symptom)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0.iter().copied()
    }

    /// First token in canonical order.
    pub fn first(&self) -> Option<Symptom> {
        self.0.first().copied()
    }

    /// Sorted surface forms joined with `+`, e.g. `fever+rash`.
    pub fn canonical_key(&self) -> String {
        let mut key = String::new();
        for (i, symptom) in self.iter().enumerate() {
            if i > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(symptom.as_str());
        }
        key
    }

    pub fn has_emergency(&self) -> bool {
        self.iter().any(|symptom| symptom.is_emergency())
    }

    /// Comma separated surface forms for display.
    pub fn display_list(&self) -> String {
        self.iter()
            .map(|symptom| symptom.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Symptom; N]> for SymptomSet {
    fn from(symptoms: [Symptom; N]) -> Self {
        symptoms.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_order_independent() {
        let a = SymptomSet::from([Symptom::Fever, Symptom::Rash]);
        let b = SymptomSet::from([Symptom::Rash, Symptom::Fever]);
        assert_eq!(a.canonical_key(), "fever+rash");
        assert_eq!(a.canonical_key(), b.canonical_key());
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_key_sorts_by_surface_form() {
        let set = SymptomSet::from([
            Symptom::Vomiting,
            Symptom::Fever,
            Symptom::Diarrhea,
        ]);
        assert_eq!(set.canonical_key(), "diarrhea+fever+vomiting");

        let set = SymptomSet::from([Symptom::DifficultyBreathing, Symptom::Cough]);
        assert_eq!(set.canonical_key(), "cough+difficulty breathing");
    }

    #[test]
    fn empty_set_has_empty_key() {
        let set = SymptomSet::new();
        assert!(set.is_empty());
        assert_eq!(set.canonical_key(), "");
        assert_eq!(set.first(), None);
    }

    #[test]
    fn duplicates_collapse() {
        let set: SymptomSet = [Symptom::Cough, Symptom::Cough].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn first_is_lexicographically_smallest() {
        let set = SymptomSet::from([Symptom::Rash, Symptom::Pain, Symptom::Headache]);
        assert_eq!(set.first(), Some(Symptom::Headache));
    }

    #[test]
    fn emergency_membership() {
        assert!(Symptom::ChestPain.is_emergency());
        assert!(Symptom::Unconscious.is_emergency());
        assert!(!Symptom::Pain.is_emergency());
        assert!(SymptomSet::from([Symptom::Fever, Symptom::SevereBleeding]).has_emergency());
        assert!(!SymptomSet::from([Symptom::Fever, Symptom::Rash]).has_emergency());
    }

    #[test]
    fn scan_order_covers_vocabulary_once() {
        let set: SymptomSet = Symptom::SCAN_ORDER.into_iter().collect();
        assert_eq!(set.len(), Symptom::SCAN_ORDER.len());
    }

    #[test]
    fn serializes_as_sorted_surface_forms() {
        let set = SymptomSet::from([Symptom::Rash, Symptom::ChestPain]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["chest pain","rash"]"#
        );
    }
}

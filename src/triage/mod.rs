//! Triage: free-text symptom report → classification.
//!
//! `normalize` folds multilingual text into canonical symptom tokens,
//! `knowledge` holds the fixed symptom-combination table, and `classifier`
//! applies the override / retrieval / fallback policy.

pub mod aliases;
pub mod classifier;
pub mod knowledge;
pub mod messages;
pub mod normalize;

pub use classifier::SymptomClassifier;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use normalize::normalize;

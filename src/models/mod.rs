pub mod classification;
pub mod enums;
pub mod symptom;

pub use classification::{ClassificationRef, ClassificationResult};
pub use enums::{ClusterSeverity, FeedbackStatus, Language, ModelError, SourceTag};
pub use symptom::{Symptom, SymptomSet};

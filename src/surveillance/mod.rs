//! Surveillance aggregation: syndrome counts, outbreak clusters, and the
//! health worker feedback log.
//!
//! Each store owns its state behind its own lock and is constructed once
//! per engine (`CoreState`), then shared by reference with the classifier.

pub mod feedback;
pub mod outbreaks;
pub mod syndromes;
pub mod types;

pub use feedback::{parse_rating, FeedbackLog};
pub use outbreaks::OutbreakDetector;
pub use syndromes::SyndromeRegistry;
pub use types::*;

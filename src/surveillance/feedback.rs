use std::sync::RwLock;

use super::types::{FeedbackError, FeedbackRecord, FeedbackSummary};
use crate::models::{ClassificationRef, FeedbackStatus};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Ratings below this are queued for retraining.
const RETRAINING_CUTOFF: u8 = 3;

/// Validate a numeric rating.
pub fn validate_rating(rating: i64) -> Result<u8, FeedbackError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating as u8)
    } else {
        Err(FeedbackError::InvalidRating(rating.to_string()))
    }
}

/// Parse a free-text rating ("4", " 2 "). Non-integers are rejected, not
/// truncated.
pub fn parse_rating(input: &str) -> Result<u8, FeedbackError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| FeedbackError::InvalidRating(input.to_string()))
        .and_then(validate_rating)
}

/// Append-only log of health worker feedback, read by the external
/// retraining consumer.
pub struct FeedbackLog {
    records: RwLock<Vec<FeedbackRecord>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Validate and append one record with status `PENDING_REVIEW`.
    /// Nothing is appended when validation fails.
    pub fn submit(
        &self,
        classification_ref: ClassificationRef,
        rating: i64,
        correction: Option<&str>,
        reviewer_id: Option<&str>,
    ) -> Result<FeedbackRecord, FeedbackError> {
        let rating = validate_rating(rating)?;
        let correction = correction
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        let reviewer_id = reviewer_id
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        let mut records = self
            .records
            .write()
            .map_err(|_| FeedbackError::LockPoisoned)?;

        let record = FeedbackRecord {
            id: records.len() as u64 + 1,
            classification_ref,
            rating,
            correction,
            reviewer_id,
            status: FeedbackStatus::PendingReview,
            queued_for_retraining: rating < RETRAINING_CUTOFF,
            submitted_at: chrono::Local::now().naive_local(),
        };
        records.push(record.clone());

        tracing::info!(
            feedback_id = record.id,
            %classification_ref,
            rating,
            queued_for_retraining = record.queued_for_retraining,
            "Feedback logged"
        );
        Ok(record)
    }

    /// All records in submission order.
    pub fn list(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        let records = self
            .records
            .read()
            .map_err(|_| FeedbackError::LockPoisoned)?;
        Ok(records.clone())
    }

    /// Records and their summary, read under one guard.
    pub fn snapshot(&self) -> Result<(Vec<FeedbackRecord>, FeedbackSummary), FeedbackError> {
        let records = self
            .records
            .read()
            .map_err(|_| FeedbackError::LockPoisoned)?;
        let summary = FeedbackSummary {
            total_feedback: records.len(),
            pending_review: records
                .iter()
                .filter(|r| r.status == FeedbackStatus::PendingReview)
                .count(),
            queued_for_retraining: records.iter().filter(|r| r.queued_for_retraining).count(),
        };
        Ok((records.clone(), summary))
    }
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn rating_above_range_is_rejected() {
        let log = FeedbackLog::new();
        let err = log.submit(Uuid::new_v4(), 6, Some(""), None).unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidRating(ref v) if v == "6"));
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn rating_below_range_is_rejected() {
        let log = FeedbackLog::new();
        assert!(matches!(
            log.submit(Uuid::new_v4(), 0, Some(""), None),
            Err(FeedbackError::InvalidRating(_))
        ));
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn valid_rating_appends_pending_record() {
        let log = FeedbackLog::new();
        let reference = Uuid::new_v4();
        let record = log.submit(reference, 3, Some(""), None).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.classification_ref, reference);
        assert_eq!(record.rating, 3);
        assert_eq!(record.status, FeedbackStatus::PendingReview);
        assert!(record.correction.is_none());
        assert!(!record.queued_for_retraining);

        let records = log.list().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn low_rating_is_queued_for_retraining() {
        let log = FeedbackLog::new();
        let record = log
            .submit(Uuid::new_v4(), 2, Some("Should be gastroenteritis"), Some("asha-17"))
            .unwrap();
        assert!(record.queued_for_retraining);
        assert_eq!(record.status, FeedbackStatus::PendingReview);
        assert_eq!(record.correction.as_deref(), Some("Should be gastroenteritis"));
        assert_eq!(record.reviewer_id.as_deref(), Some("asha-17"));
    }

    #[test]
    fn records_keep_submission_order() {
        let log = FeedbackLog::new();
        for rating in [5, 1, 4] {
            log.submit(Uuid::new_v4(), rating, None, None).unwrap();
        }
        let _ = log.submit(Uuid::new_v4(), 9, None, None);

        let ratings: Vec<u8> = log.list().unwrap().iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 1, 4]);
        let ids: Vec<u64> = log.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn summary_counts() {
        let log = FeedbackLog::new();
        log.submit(Uuid::new_v4(), 1, None, None).unwrap();
        log.submit(Uuid::new_v4(), 5, None, None).unwrap();
        let (records, summary) = log.snapshot().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            summary,
            FeedbackSummary {
                total_feedback: 2,
                pending_review: 2,
                queued_for_retraining: 1,
            }
        );
    }

    #[test]
    fn parse_rating_accepts_trimmed_integers() {
        assert_eq!(parse_rating(" 4 ").unwrap(), 4);
        assert_eq!(parse_rating("1").unwrap(), 1);
    }

    #[test]
    fn parse_rating_rejects_non_integers() {
        for input in ["", "abc", "3.5", "five", "0", "6", "-2"] {
            assert!(
                matches!(parse_rating(input), Err(FeedbackError::InvalidRating(_))),
                "{input:?} should be rejected"
            );
        }
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{OutbreakCluster, OutbreakSummary, SurveillanceError};
use crate::models::{ClusterSeverity, SymptomSet};

/// Cluster identity: exact location label and canonical symptom key.
type ClusterKey = (String, String);

#[derive(Default)]
struct Clusters {
    clusters: Vec<OutbreakCluster>,
    by_key: HashMap<ClusterKey, usize>,
}

/// Coarse outbreak detector: counts reports per (location, symptom
/// combination) and escalates severity once a cluster grows past the
/// threshold. Backed by a single RwLock so per-key updates apply in
/// submission order.
pub struct OutbreakDetector {
    inner: RwLock<Clusters>,
    high_threshold: u64,
}

impl OutbreakDetector {
    /// `high_threshold`: a cluster escalates to HIGH once `count > high_threshold`.
    pub fn new(high_threshold: u32) -> Self {
        Self {
            inner: RwLock::new(Clusters::default()),
            high_threshold: u64::from(high_threshold),
        }
    }

    /// Record one report. Creates the cluster (HIGH if any emergency token is
    /// present, else MEDIUM) or increments it. Severity never downgrades.
    pub fn record(
        &self,
        symptoms: &SymptomSet,
        location_label: &str,
    ) -> Result<OutbreakCluster, SurveillanceError> {
        let now = chrono::Local::now().naive_local();
        let signature = symptoms.canonical_key();
        let key = (location_label.to_string(), signature);

        let mut state = self
            .inner
            .write()
            .map_err(|_| SurveillanceError::LockPoisoned("outbreak"))?;

        if let Some(&idx) = state.by_key.get(&key) {
            let cluster = &mut state.clusters[idx];
            cluster.count += 1;
            cluster.last_seen = now;
            if cluster.count > self.high_threshold
                && cluster.severity != ClusterSeverity::High
            {
                cluster.severity = ClusterSeverity::High;
                tracing::warn!(
                    cluster_id = cluster.id,
                    location = %cluster.location_label,
                    signature = %cluster.signature,
                    count = cluster.count,
                    "Outbreak cluster escalated to HIGH"
                );
            }
            return Ok(cluster.clone());
        }

        let severity = if symptoms.has_emergency() {
            ClusterSeverity::High
        } else {
            ClusterSeverity::Medium
        };
        let idx = state.clusters.len();
        let cluster = OutbreakCluster {
            id: idx as u64 + 1,
            location_label: key.0.clone(),
            symptoms: symptoms.clone(),
            signature: key.1.clone(),
            count: 1,
            severity,
            first_seen: now,
            last_seen: now,
        };
        state.clusters.push(cluster.clone());
        state.by_key.insert(key, idx);

        tracing::debug!(
            cluster_id = cluster.id,
            location = location_label,
            signature = %cluster.signature,
            severity = %severity,
            "New outbreak cluster"
        );
        Ok(cluster)
    }

    /// All clusters, in creation order.
    pub fn list(&self) -> Result<Vec<OutbreakCluster>, SurveillanceError> {
        let state = self
            .inner
            .read()
            .map_err(|_| SurveillanceError::LockPoisoned("outbreak"))?;
        Ok(state.clusters.clone())
    }

    /// Clusters and their summary, read under one guard so the counts
    /// always describe the returned list.
    pub fn snapshot(
        &self,
    ) -> Result<(Vec<OutbreakCluster>, OutbreakSummary), SurveillanceError> {
        let state = self
            .inner
            .read()
            .map_err(|_| SurveillanceError::LockPoisoned("outbreak"))?;
        let summary = OutbreakSummary {
            total_clusters: state.clusters.len(),
            high_severity_clusters: state
                .clusters
                .iter()
                .filter(|c| c.severity == ClusterSeverity::High)
                .count(),
        };
        Ok((state.clusters.clone(), summary))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::Symptom;

    fn gastro() -> SymptomSet {
        SymptomSet::from([Symptom::Vomiting, Symptom::Diarrhea])
    }

    #[test]
    fn new_cluster_is_medium_without_emergency_token() {
        let detector = OutbreakDetector::new(5);
        let cluster = detector.record(&gastro(), "Mysuru").unwrap();
        assert_eq!(cluster.id, 1);
        assert_eq!(cluster.count, 1);
        assert_eq!(cluster.severity, ClusterSeverity::Medium);
        assert_eq!(cluster.signature, "diarrhea+vomiting");
    }

    #[test]
    fn new_cluster_is_high_with_emergency_token() {
        let detector = OutbreakDetector::new(5);
        let set = SymptomSet::from([Symptom::Cough, Symptom::DifficultyBreathing]);
        let cluster = detector.record(&set, "Mysuru").unwrap();
        assert_eq!(cluster.severity, ClusterSeverity::High);
    }

    #[test]
    fn escalates_after_threshold() {
        let detector = OutbreakDetector::new(5);
        for expected in 1..=5 {
            let cluster = detector.record(&gastro(), "Mysuru").unwrap();
            assert_eq!(cluster.count, expected);
            assert_eq!(cluster.severity, ClusterSeverity::Medium);
        }
        let cluster = detector.record(&gastro(), "Mysuru").unwrap();
        assert_eq!(cluster.count, 6);
        assert_eq!(cluster.severity, ClusterSeverity::High);
    }

    #[test]
    fn severity_never_downgrades_and_count_is_monotonic() {
        let detector = OutbreakDetector::new(2);
        let mut last_count = 0;
        let mut seen_high = false;
        for _ in 0..10 {
            let cluster = detector.record(&gastro(), "Mysuru").unwrap();
            assert!(cluster.count > last_count);
            last_count = cluster.count;
            if seen_high {
                assert_eq!(cluster.severity, ClusterSeverity::High);
            }
            seen_high |= cluster.severity == ClusterSeverity::High;
        }
        assert!(seen_high);
    }

    #[test]
    fn identity_requires_exact_location_and_pattern() {
        let detector = OutbreakDetector::new(5);
        detector.record(&gastro(), "Mysuru").unwrap();
        detector.record(&gastro(), "Bengaluru").unwrap();
        let superset = SymptomSet::from([Symptom::Vomiting, Symptom::Diarrhea, Symptom::Fever]);
        detector.record(&superset, "Mysuru").unwrap();
        let again = detector.record(&gastro(), "Mysuru").unwrap();

        assert_eq!(again.id, 1);
        assert_eq!(again.count, 2);
        let clusters = detector.list().unwrap();
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[1].location_label, "Bengaluru");
        assert_eq!(clusters[2].signature, "diarrhea+fever+vomiting");
    }

    #[test]
    fn summary_counts_high_clusters() {
        let detector = OutbreakDetector::new(1);
        detector.record(&gastro(), "Mysuru").unwrap();
        detector.record(&gastro(), "Mysuru").unwrap();
        detector.record(&gastro(), "Hubballi").unwrap();

        let (clusters, summary) = detector.snapshot().unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(
            summary,
            OutbreakSummary {
                total_clusters: 2,
                high_severity_clusters: 1,
            }
        );
    }

    #[test]
    fn snapshot_summary_matches_its_clusters_under_concurrent_writes() {
        let detector = Arc::new(OutbreakDetector::new(3));
        let writer = {
            let detector = Arc::clone(&detector);
            std::thread::spawn(move || {
                for i in 0..200 {
                    detector.record(&gastro(), &format!("Village-{}", i % 20)).unwrap();
                }
            })
        };

        for _ in 0..200 {
            let (clusters, summary) = detector.snapshot().unwrap();
            assert_eq!(summary.total_clusters, clusters.len());
            let high = clusters
                .iter()
                .filter(|c| c.severity == ClusterSeverity::High)
                .count();
            assert_eq!(summary.high_severity_clusters, high);
        }
        writer.join().unwrap();
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let detector = Arc::new(OutbreakDetector::new(5));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let detector = Arc::clone(&detector);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        detector.record(&gastro(), "Mysuru").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let clusters = detector.list().unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count, 2000);
        assert_eq!(clusters[0].severity, ClusterSeverity::High);
    }
}

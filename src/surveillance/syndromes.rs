use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{SurveillanceError, SyndromeAggregate};
use crate::models::SymptomSet;

#[derive(Default)]
struct Registry {
    aggregates: Vec<SyndromeAggregate>,
    by_name: HashMap<String, usize>,
}

/// In-memory syndrome counts keyed by syndrome name, backed by RwLock.
/// Upserts take the write lock for the whole read-increment-write.
pub struct SyndromeRegistry {
    inner: RwLock<Registry>,
}

impl SyndromeRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry::default()),
        }
    }

    /// Record one observation of `name`. Creates the aggregate with
    /// `count = 1`, or increments it and refreshes pattern, location and
    /// `last_seen`. Returns the aggregate after the update.
    pub fn record(
        &self,
        name: &str,
        symptoms: &SymptomSet,
        location_label: &str,
    ) -> Result<SyndromeAggregate, SurveillanceError> {
        let now = chrono::Local::now().naive_local();
        let mut registry = self
            .inner
            .write()
            .map_err(|_| SurveillanceError::LockPoisoned("syndrome"))?;

        if let Some(&idx) = registry.by_name.get(name) {
            let aggregate = &mut registry.aggregates[idx];
            aggregate.count += 1;
            aggregate.symptoms = symptoms.clone();
            aggregate.location_label = location_label.to_string();
            if !aggregate.locations.iter().any(|l| l == location_label) {
                aggregate.locations.push(location_label.to_string());
            }
            aggregate.last_seen = now;

            tracing::debug!(syndrome = name, count = aggregate.count, "Syndrome count updated");
            return Ok(aggregate.clone());
        }

        let aggregate = SyndromeAggregate {
            name: name.to_string(),
            symptoms: symptoms.clone(),
            count: 1,
            location_label: location_label.to_string(),
            locations: vec![location_label.to_string()],
            first_seen: now,
            last_seen: now,
        };
        let idx = registry.aggregates.len();
        registry.aggregates.push(aggregate.clone());
        registry.by_name.insert(name.to_string(), idx);

        tracing::info!(syndrome = name, location = location_label, "New syndrome observed");
        Ok(aggregate)
    }

    /// All aggregates, in the order their syndromes were first observed.
    pub fn list(&self) -> Result<Vec<SyndromeAggregate>, SurveillanceError> {
        let registry = self
            .inner
            .read()
            .map_err(|_| SurveillanceError::LockPoisoned("syndrome"))?;
        Ok(registry.aggregates.clone())
    }

    pub fn get(&self, name: &str) -> Result<Option<SyndromeAggregate>, SurveillanceError> {
        let registry = self
            .inner
            .read()
            .map_err(|_| SurveillanceError::LockPoisoned("syndrome"))?;
        Ok(registry
            .by_name
            .get(name)
            .map(|&idx| registry.aggregates[idx].clone()))
    }
}

impl Default for SyndromeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::Symptom;

    fn dengue() -> SymptomSet {
        SymptomSet::from([Symptom::Fever, Symptom::Rash])
    }

    #[test]
    fn first_observation_creates_with_count_one() {
        let registry = SyndromeRegistry::new();
        let agg = registry.record("Dengue-like Syndrome", &dengue(), "Mysuru").unwrap();
        assert_eq!(agg.count, 1);
        assert_eq!(agg.location_label, "Mysuru");
        assert_eq!(agg.first_seen, agg.last_seen);
    }

    #[test]
    fn repeat_observation_increments_and_refreshes() {
        let registry = SyndromeRegistry::new();
        registry.record("Dengue-like Syndrome", &dengue(), "Mysuru").unwrap();
        let pattern = SymptomSet::from([Symptom::Fever, Symptom::Rash, Symptom::Pain]);
        let agg = registry.record("Dengue-like Syndrome", &pattern, "Bengaluru").unwrap();

        assert_eq!(agg.count, 2);
        assert_eq!(agg.symptoms, pattern);
        assert_eq!(agg.location_label, "Bengaluru");
        assert_eq!(agg.locations, vec!["Mysuru", "Bengaluru"]);
        assert!(agg.last_seen >= agg.first_seen);
    }

    #[test]
    fn locations_stay_distinct() {
        let registry = SyndromeRegistry::new();
        for _ in 0..3 {
            registry.record("Respiratory Syndrome", &dengue(), "Mysuru").unwrap();
        }
        let agg = registry.get("Respiratory Syndrome").unwrap().unwrap();
        assert_eq!(agg.count, 3);
        assert_eq!(agg.locations, vec!["Mysuru"]);
    }

    #[test]
    fn list_preserves_first_seen_order() {
        let registry = SyndromeRegistry::new();
        registry.record("B", &dengue(), "X").unwrap();
        registry.record("A", &dengue(), "X").unwrap();
        registry.record("B", &dengue(), "X").unwrap();

        let names: Vec<_> = registry.list().unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn unknown_name_is_none() {
        let registry = SyndromeRegistry::new();
        assert!(registry.get("Nothing").unwrap().is_none());
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let registry = Arc::new(SyndromeRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        registry.record("Dengue-like Syndrome", &dengue(), "Mysuru").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let agg = registry.get("Dengue-like Syndrome").unwrap().unwrap();
        assert_eq!(agg.count, 2000);
    }
}

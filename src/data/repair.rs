//! Normalization of feature collections whose attributes are stored at the
//! top level of each feature instead of under `properties`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Keys that describe a feature's structure rather than its attributes.
const STRUCTURAL_KEYS: [&str; 3] = ["type", "geometry", "properties"];

/// What happened to a single feature during repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// `properties` was missing or null and has been built from top-level keys.
    Repaired,
    /// `properties` was already an object.
    Untouched,
    /// Neither shape is recognizable; the feature is left as is.
    PassedThrough,
}

/// Counts of repair outcomes over a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    pub repaired: usize,
    pub untouched: usize,
    pub passed_through: usize,
}

impl RepairReport {
    fn add(&mut self, outcome: RepairOutcome) {
        match outcome {
            RepairOutcome::Repaired => self.repaired += 1,
            RepairOutcome::Untouched => self.untouched += 1,
            RepairOutcome::PassedThrough => self.passed_through += 1,
        }
    }
}

/// Make sure `feature` exposes its attributes under `properties`.
pub fn repair_feature(feature: &mut Value) -> RepairOutcome {
    let Some(obj) = feature.as_object_mut() else { return RepairOutcome::PassedThrough };

    match obj.get("properties") {
        Some(Value::Object(_)) => RepairOutcome::Untouched,
        None | Some(Value::Null) => {
            let properties: Map<String, Value> = obj.iter()
                .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            obj.insert("properties".to_string(), Value::Object(properties));
            RepairOutcome::Repaired
        }
        Some(_) => RepairOutcome::PassedThrough,
    }
}

/// Repair every feature of a collection in place. Idempotent.
///
/// A value without a `features` array is left untouched and reports nothing.
pub fn repair_feature_collection(collection: &mut Value) -> RepairReport {
    let mut report = RepairReport::default();
    if let Some(features) = collection.get_mut("features").and_then(Value::as_array_mut) {
        for feature in features.iter_mut() {
            report.add(repair_feature(feature));
        }
    }
    report
}

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{Diagnostics, Source};

/// Attribute holding the drought-monitor severity class.
pub const SEVERITY_PROPERTY: &str = "DM";

/// One polygon of the drought-severity surface, after repair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroughtFeature {
    pub geometry: Value,
    pub properties: Map<String, Value>,
    pub severity: Option<i64>,
}

impl DroughtFeature {
    /// Read a repaired feature. Features that are not objects have nothing to draw.
    pub fn from_feature(feature: &Value) -> Result<Self, String> {
        let obj = feature.as_object().ok_or("feature is not an object")?;
        // Repair guarantees a bag unless `properties` held a non-object; that case gets an empty one.
        let properties = match obj.get("properties") {
            Some(Value::Object(props)) => props.clone(),
            _ => Map::new(),
        };
        let severity = properties.get(SEVERITY_PROPERTY).and_then(parse_severity);

        Ok(Self {
            geometry: obj.get("geometry").cloned().unwrap_or(Value::Null),
            properties,
            severity,
        })
    }
}

/// Read a severity class from an integer, a finite float (truncated), or an integer string.
pub fn parse_severity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64().filter(|f| f.is_finite() && f.abs() < i64::MAX as f64).map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Collect drought features from a repaired collection, quarantining non-features.
/// Features kept with a defaulted (empty) attribute bag are recorded too.
pub fn parse_drought(collection: &Value, diagnostics: &mut Diagnostics) -> Vec<DroughtFeature> {
    let Some(features) = collection.get("features").and_then(Value::as_array) else { return Vec::new() };

    features.iter().enumerate()
        .filter_map(|(idx, feature)| match DroughtFeature::from_feature(feature) {
            Ok(parsed) => {
                if !matches!(feature.get("properties"), Some(Value::Object(_))) {
                    diagnostics.record(Source::Drought, idx, "properties is not an object; using an empty bag");
                }
                Some(parsed)
            }
            Err(reason) => { diagnostics.record(Source::Drought, idx, reason); None }
        })
        .collect()
}

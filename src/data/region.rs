use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{Diagnostics, Source};

/// Attribute holding a region's name, the score join key.
pub const NAME_PROPERTY: &str = "name";

/// A named administrative boundary; `name` is the join key for scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPolygon {
    pub name: String,
    pub geometry: Value,
    pub properties: Map<String, Value>,
}

impl RegionPolygon {
    /// Read a region from a GeoJSON feature. The name is kept verbatim.
    pub fn from_feature(feature: &Value) -> Result<Self, String> {
        let properties = feature.get("properties")
            .and_then(Value::as_object)
            .ok_or("feature has no properties object")?;
        let name = properties.get(NAME_PROPERTY)
            .and_then(Value::as_str)
            .ok_or("feature has no string `name` property")?;

        Ok(Self {
            name: name.to_string(),
            geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
            properties: properties.clone(),
        })
    }
}

/// Collect the named regions of a feature collection in input order.
pub fn parse_regions(collection: &Value, diagnostics: &mut Diagnostics) -> Vec<RegionPolygon> {
    let Some(features) = collection.get("features").and_then(Value::as_array) else { return Vec::new() };

    features.iter().enumerate()
        .filter_map(|(idx, feature)| match RegionPolygon::from_feature(feature) {
            Ok(region) => Some(region),
            Err(reason) => { diagnostics.record(Source::Regions, idx, reason); None }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn names_are_kept_verbatim() {
        let fc = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "id": "TX", "properties": { "name": "Texas" }, "geometry": { "type": "Polygon", "coordinates": [] } },
                { "type": "Feature", "properties": { "name": " kansas" }, "geometry": null },
            ]
        });
        let regions = parse_regions(&fc, &mut Diagnostics::new());
        assert_eq!(regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["Texas", " kansas"]);
        assert_eq!(regions[0].geometry["type"], json!("Polygon"));
        assert_eq!(regions[1].geometry, Value::Null);
    }

    #[test]
    fn unnamed_regions_are_quarantined() {
        let fc = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "NAME": "Utah" }, "geometry": null },
                { "type": "Feature", "geometry": null },
                { "type": "Feature", "properties": { "name": "Idaho" }, "geometry": null },
            ]
        });
        let mut diag = Diagnostics::new();
        let regions = parse_regions(&fc, &mut diag);
        assert_eq!(regions.len(), 1);
        assert_eq!(diag.count(Source::Regions), 2);
    }
}

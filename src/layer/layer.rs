use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    data::{parse_severity, SEVERITY_PROPERTY},
    join::{ScoreStatus, ScoreTable},
    marker::{Marker, MarkerCategory},
    style::{drought_style, ScoreRamp, Style},
};

/// The three kinds of layer the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Choropleth,
    PolygonOverlay,
    MarkerSet,
}

/// How a layer's features get their style. Serializable so the renderer can restyle on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StyleRule {
    /// Look `property` up in `scores`, then color by score.
    ScoreRamp { ramp: ScoreRamp, property: &'static str, scores: BTreeMap<String, i64> },
    /// Color by the drought class stored in `property`.
    DroughtSeverity { property: &'static str },
    /// Icon and color by marker category.
    MarkerCategory,
}

impl StyleRule {
    /// Choropleth rule over a score table, joining on `property`.
    pub fn score_ramp(table: &ScoreTable, property: &'static str) -> Self {
        StyleRule::ScoreRamp {
            ramp: ScoreRamp::from_domain(table.domain()),
            property,
            scores: table.rows().iter().map(|row| (row.region.clone(), row.value)).collect(),
        }
    }

    /// Style for a polygon from its score-join status. Only score rules use it.
    pub fn for_status(&self, status: ScoreStatus) -> Option<Style> {
        match self {
            StyleRule::ScoreRamp { ramp, .. } => Some(ramp.style(status)),
            _ => None,
        }
    }

    /// Style for a polygon from its attribute bag. Markers are drawn with icons, so they have none.
    pub fn for_properties(&self, properties: &Map<String, Value>) -> Option<Style> {
        match self {
            StyleRule::ScoreRamp { ramp, property, scores } => {
                let status = properties.get(*property)
                    .and_then(Value::as_str)
                    .and_then(|name| scores.get(name))
                    .map_or(ScoreStatus::Unscored, |&score| ScoreStatus::Scored(score));
                Some(ramp.style(status))
            }
            StyleRule::DroughtSeverity { property } => {
                Some(drought_style(properties.get(*property).and_then(parse_severity)))
            }
            StyleRule::MarkerCategory => None,
        }
    }
}

/// One region of the choropleth join table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethRegion {
    pub name: String,
    #[serde(flatten)]
    pub status: ScoreStatus,
    pub style: Style,
    pub geometry: Value,
}

/// A polygon with its resolved style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledFeature {
    pub geometry: Value,
    pub properties: Map<String, Value>,
    pub style: Style,
}

/// Which attribute a hover tooltip shows, and under what label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipField {
    pub field: String,
    pub alias: String,
}

impl TooltipField {
    pub fn drought_level() -> Self {
        Self { field: SEVERITY_PROPERTY.to_string(), alias: "Drought Level (0-4):".to_string() }
    }
}

/// Markers per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub airborne: usize,
    pub ground_based: usize,
}

impl CategoryCounts {
    pub fn of(markers: &[Marker]) -> Self {
        markers.iter().fold(Self::default(), |mut counts, marker| {
            match marker.category {
                MarkerCategory::Airborne => counts.airborne += 1,
                MarkerCategory::GroundBased => counts.ground_based += 1,
            }
            counts
        })
    }
}

/// What a layer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerContent {
    Choropleth { legend: String, regions: Vec<ChoroplethRegion> },
    PolygonOverlay { tooltip: TooltipField, features: Vec<StyledFeature> },
    MarkerSet { counts: CategoryCounts, markers: Vec<Marker> },
}

/// A named, independently togglable unit of the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub style_rule: StyleRule,
    pub content: LayerContent,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self.content {
            LayerContent::Choropleth { .. } => LayerKind::Choropleth,
            LayerContent::PolygonOverlay { .. } => LayerKind::PolygonOverlay,
            LayerContent::MarkerSet { .. } => LayerKind::MarkerSet,
        }
    }

    /// Number of drawable entries.
    pub fn len(&self) -> usize {
        match &self.content {
            LayerContent::Choropleth { regions, .. } => regions.len(),
            LayerContent::PolygonOverlay { features, .. } => features.len(),
            LayerContent::MarkerSet { markers, .. } => markers.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Resolve one feature's style through the layer's rule.
    pub fn style_of(&self, properties: &Map<String, Value>) -> Option<Style> {
        self.style_rule.for_properties(properties)
    }

    pub fn markers(&self) -> Option<&[Marker]> {
        match &self.content {
            LayerContent::MarkerSet { markers, .. } => Some(markers),
            _ => None,
        }
    }

    pub fn features(&self) -> Option<&[StyledFeature]> {
        match &self.content {
            LayerContent::PolygonOverlay { features, .. } => Some(features),
            _ => None,
        }
    }

    pub fn regions(&self) -> Option<&[ChoroplethRegion]> {
        match &self.content {
            LayerContent::Choropleth { regions, .. } => Some(regions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{data::NAME_PROPERTY, style::Paint};

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn layer(style_rule: StyleRule, content: LayerContent) -> Layer {
        Layer { name: "L".into(), visible: true, style_rule, content }
    }

    #[test]
    fn drought_rule_reads_property() {
        let rule = StyleRule::DroughtSeverity { property: SEVERITY_PROPERTY };
        assert_eq!(rule.for_properties(&props(json!({ "DM": 4 }))), Some(drought_style(Some(4))));
        assert_eq!(rule.for_properties(&Map::new()).unwrap().fill_color, Paint::Transparent);
        assert_eq!(rule.for_status(ScoreStatus::Unscored), None);
    }

    #[test]
    fn ramp_rule_joins_on_name() {
        let table = ScoreTable::from_pairs([("Utah", 1), ("Montana", 3)]);
        let rule = StyleRule::score_ramp(&table, NAME_PROPERTY);
        let ramp = ScoreRamp::new(1, 3);

        assert_eq!(rule.for_status(ScoreStatus::Scored(3)), Some(ramp.style(ScoreStatus::Scored(3))));
        assert_eq!(rule.for_properties(&props(json!({ "name": "Montana" }))), Some(ramp.style(ScoreStatus::Scored(3))));
        assert_eq!(rule.for_properties(&props(json!({ "name": "Atlantis" })))
            .map(|s| s.fill_color.to_string()), Some("#dcdcdc".to_string()));
        assert_eq!(rule.for_properties(&Map::new()), Some(ramp.style(ScoreStatus::Unscored)));
    }

    #[test]
    fn style_of_covers_every_layer_kind() {
        let table = ScoreTable::from_pairs([("Texas", 2)]);
        let choropleth = layer(
            StyleRule::score_ramp(&table, NAME_PROPERTY),
            LayerContent::Choropleth { legend: "Regulation level".into(), regions: Vec::new() },
        );
        let drought = layer(
            StyleRule::DroughtSeverity { property: SEVERITY_PROPERTY },
            LayerContent::PolygonOverlay { tooltip: TooltipField::drought_level(), features: Vec::new() },
        );
        let markers = layer(
            StyleRule::MarkerCategory,
            LayerContent::MarkerSet { counts: CategoryCounts::default(), markers: Vec::new() },
        );

        let texas = choropleth.style_of(&props(json!({ "name": "Texas" }))).unwrap();
        assert_eq!(texas, ScoreRamp::new(2, 2).style(ScoreStatus::Scored(2)));
        assert_eq!(drought.style_of(&props(json!({ "DM": "1" }))), Some(drought_style(Some(1))));
        assert_eq!(markers.style_of(&props(json!({ "delivery_method": "Fixed-wing Aircraft" }))), None);
    }

    #[test]
    fn rule_serializes_with_tag() {
        let rule = StyleRule::DroughtSeverity { property: "DM" };
        assert_eq!(serde_json::to_value(&rule).unwrap(), json!({ "rule": "drought_severity", "property": "DM" }));
        assert_eq!(serde_json::to_value(&StyleRule::MarkerCategory).unwrap(), json!({ "rule": "marker_category" }));

        let rule = StyleRule::score_ramp(&ScoreTable::from_pairs([("Utah", 1)]), NAME_PROPERTY);
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({ "rule": "score_ramp", "ramp": { "min": 1, "max": 1 }, "property": "name", "scores": { "Utah": 1 } }),
        );
    }
}

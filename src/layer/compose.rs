use ahash::AHashMap;
use geo::{BoundingRect, MultiPoint};
use serde::Serialize;

use crate::{
    cache::LoadedData,
    config::{DashboardConfig, Viewport},
    data::{Diagnostics, DroughtFeature, ProjectRecord, RegionPolygon, NAME_PROPERTY, SEVERITY_PROPERTY},
    join::{join_scores, ScoreTable},
    layer::{
        CategoryCounts, ChoroplethRegion, Layer, LayerContent, StyleRule, StyledFeature, TooltipField,
    },
    marker::{project_all, Marker},
    style::{drought_style, ScoreRamp},
};

/// Bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    /// Box around every marker, `None` when there are none.
    pub fn of_markers(markers: &[Marker]) -> Option<Self> {
        let points: MultiPoint<f64> = markers.iter().map(Marker::point).collect();
        let rect = points.bounding_rect()?;
        Some(Self { west: rect.min().x, south: rect.min().y, east: rect.max().x, north: rect.max().y })
    }
}

/// Everything the renderer needs for one render pass. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSet {
    pub layers: Vec<Layer>,
    pub viewport: Viewport,
    pub basemap: String,
    pub marker_bounds: Option<Bounds>,
    pub source_digest: Option<String>,
    pub diagnostics: Diagnostics,
}

impl LayerSet {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name.as_str()).collect()
    }
}

/// Borrowed inputs of the composer.
#[derive(Debug, Clone, Copy)]
pub struct LayerInputs<'a> {
    pub projects: &'a [ProjectRecord],
    pub regions: &'a [RegionPolygon],
    pub drought: &'a [DroughtFeature],
    pub scores: &'a ScoreTable,
}

impl<'a> LayerInputs<'a> {
    pub fn from_loaded(data: &'a LoadedData, scores: &'a ScoreTable) -> Self {
        Self { projects: &data.projects, regions: &data.regions, drought: &data.drought, scores }
    }
}

/// Make names unique by suffixing repeats with " (2)", " (3)", ...
pub fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: AHashMap<String, usize> = AHashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let mut candidate = name.to_string();
        let mut n = seen.get(name).copied().unwrap_or(1);
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{name} ({n})");
        }
        seen.insert(name.to_string(), n);
        out.push(candidate);
    }
    out
}

fn choropleth_layer(inputs: &LayerInputs, name: String, visible: bool, legend: &str) -> Layer {
    let rule = StyleRule::score_ramp(inputs.scores, NAME_PROPERTY);
    let ramp = ScoreRamp::from_domain(inputs.scores.domain());
    let regions = join_scores(inputs.regions, inputs.scores).into_iter()
        .zip(inputs.regions)
        .map(|(joined, region)| ChoroplethRegion {
            name: joined.name,
            status: joined.status,
            style: ramp.style(joined.status),
            geometry: region.geometry.clone(),
        })
        .collect();

    Layer { name, visible, style_rule: rule, content: LayerContent::Choropleth { legend: legend.to_string(), regions } }
}

fn drought_layer(inputs: &LayerInputs, name: String, visible: bool) -> Layer {
    let features = inputs.drought.iter()
        .map(|feature| StyledFeature {
            geometry: feature.geometry.clone(),
            properties: feature.properties.clone(),
            style: drought_style(feature.severity),
        })
        .collect();

    Layer {
        name,
        visible,
        style_rule: StyleRule::DroughtSeverity { property: SEVERITY_PROPERTY },
        content: LayerContent::PolygonOverlay { tooltip: TooltipField::drought_level(), features },
    }
}

fn marker_layer(markers: Vec<Marker>, name: String, visible: bool) -> Layer {
    Layer {
        name,
        visible,
        style_rule: StyleRule::MarkerCategory,
        content: LayerContent::MarkerSet { counts: CategoryCounts::of(&markers), markers },
    }
}

/// Assemble the choropleth, drought overlay and marker layers, in that order.
/// Every layer is present even when its input is empty. The set's diagnostics
/// hold what composition itself dropped.
pub fn compose(inputs: &LayerInputs, config: &DashboardConfig) -> LayerSet {
    let mut diagnostics = Diagnostics::new();
    let markers = project_all(inputs.projects, &mut diagnostics);
    let marker_bounds = Bounds::of_markers(&markers);

    let mut layers = vec![
        choropleth_layer(inputs, config.regulatory.name.clone(), config.regulatory.visible, &config.regulatory_legend),
        drought_layer(inputs, config.drought.name.clone(), config.drought.visible),
        marker_layer(markers, config.projects.name.clone(), config.projects.visible),
    ];

    // The renderer's layer toggle is keyed by name.
    let names = unique_names(&layers.iter().map(|layer| layer.name.as_str()).collect::<Vec<_>>());
    for (layer, name) in layers.iter_mut().zip(names) {
        if layer.is_empty() { tracing::info!(layer = %name, "layer has no content") }
        layer.name = name;
    }

    LayerSet {
        layers,
        viewport: config.viewport,
        basemap: config.basemap.clone(),
        marker_bounds,
        source_digest: None,
        diagnostics,
    }
}

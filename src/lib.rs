#![doc = "seedmap: data normalization and layer composition for a cloud-seeding map dashboard"]
mod cache;
mod common;
mod config;
mod dashboard;
mod data;
mod error;
mod join;
mod layer;
mod marker;
mod style;

#[doc(inline)]
pub use cache::{load_inputs, LoadCache, LoadedData};

#[doc(inline)]
pub use config::{DashboardConfig, InputFiles, InputNames, LayerOptions, Viewport};

#[doc(inline)]
pub use dashboard::Dashboard;

#[doc(inline)]
pub use data::{
    parse_drought, parse_projects, parse_regions, parse_severity, projects_table, repair_feature,
    repair_feature_collection, Diagnostics, DroughtFeature, Issue, ProjectRecord, RegionPolygon, RepairOutcome,
    RepairReport, Source, NAME_PROPERTY, SEVERITY_PROPERTY,
};

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use join::{join_scores, JoinedRegion, RegionScore, ScoreStatus, ScoreTable, KEY_COLUMN, VALUE_COLUMN};

#[doc(inline)]
pub use layer::{
    compose, unique_names, Bounds, CategoryCounts, ChoroplethRegion, Layer, LayerContent, LayerInputs, LayerKind,
    LayerSet, StyleRule, StyledFeature, TooltipField,
};

#[doc(inline)]
pub use marker::{
    project_all, Link, Marker, MarkerCategory, Popup, AIRBORNE_MARKER, ICON_PREFIX, MAX_FIELD_CHARS, POPUP_MAX_WIDTH,
};

#[doc(inline)]
pub use style::{diverging_color, drought_style, Paint, Rgb, ScoreRamp, Style};

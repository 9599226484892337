use geo::Point;
use serde::Serialize;

use crate::{
    data::{Diagnostics, ProjectRecord, Source},
    marker::{popup::truncate, Popup, MAX_FIELD_CHARS},
};

/// Substring of `delivery_method` that marks an airborne program.
pub const AIRBORNE_MARKER: &str = "Aircraft";

/// Icon font family prefix understood by the renderer.
pub const ICON_PREFIX: &str = "fa";

/// How a program delivers its seeding agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Airborne,
    GroundBased,
}

impl MarkerCategory {
    /// Substring containment, case-sensitive.
    pub fn classify(delivery_method: &str) -> Self {
        if delivery_method.contains(AIRBORNE_MARKER) { MarkerCategory::Airborne } else { MarkerCategory::GroundBased }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MarkerCategory::Airborne => "plane",
            MarkerCategory::GroundBased => "tower-broadcast",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerCategory::Airborne => "darkblue",
            MarkerCategory::GroundBased => "cadetblue",
        }
    }
}

/// A point marker ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub category: MarkerCategory,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub icon_prefix: &'static str,
    pub tooltip: String,
    pub popup: Popup,
}

impl Marker {
    /// Derive a marker from a validated record. Deterministic.
    pub fn from_record(record: &ProjectRecord) -> Self {
        let category = MarkerCategory::classify(&record.delivery_method);
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            category,
            icon: category.icon(),
            icon_color: category.color(),
            icon_prefix: ICON_PREFIX,
            tooltip: truncate(&record.program_name, MAX_FIELD_CHARS),
            popup: Popup::from_record(record),
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Project every record with a usable position, preserving input order.
/// Records built by hand with out-of-range coordinates are skipped and recorded.
pub fn project_all(records: &[ProjectRecord], diagnostics: &mut Diagnostics) -> Vec<Marker> {
    records.iter().enumerate()
        .filter_map(|(idx, record)| {
            if record.has_valid_position() { return Some(Marker::from_record(record)) }
            diagnostics.record(
                Source::Projects,
                idx,
                format!("position ({}, {}) out of range; no marker", record.latitude, record.longitude),
            );
            None
        })
        .collect()
}

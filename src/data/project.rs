use anyhow::Result;
use geo::Point;
use polars::{frame::DataFrame, prelude::Column};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{Diagnostics, Source};

/// One cloud-seeding program, validated at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub program_name: String,
    pub operator: String,
    pub delivery_method: String,
    pub latitude: f64,
    pub longitude: f64,
    pub source_url: String,
}

/// Loosely typed record as it appears in the input file.
#[derive(Debug, Deserialize)]
struct RawProjectRecord {
    program_name: Option<String>,
    operator: Option<String>,
    delivery_method: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    source_url: Option<String>,
}

impl ProjectRecord {
    /// Marker location as (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Finite latitude in [-90, 90] and longitude in [-180, 180].
    pub fn has_valid_position(&self) -> bool {
        valid_latitude(self.latitude) && valid_longitude(self.longitude)
    }

    /// Validate a raw JSON record, returning the reason it was rejected otherwise.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        let raw = RawProjectRecord::deserialize(value).map_err(|e| format!("malformed record: {e}"))?;

        let program_name = raw.program_name
            .filter(|name| !name.trim().is_empty())
            .ok_or("missing program_name")?;
        let latitude = raw.latitude.ok_or("missing latitude")?;
        let longitude = raw.longitude.ok_or("missing longitude")?;
        if !valid_latitude(latitude) { return Err(format!("latitude {latitude} out of range")) }
        if !valid_longitude(longitude) { return Err(format!("longitude {longitude} out of range")) }

        Ok(Self {
            program_name,
            operator: raw.operator.unwrap_or_default(),
            delivery_method: raw.delivery_method.unwrap_or_default(),
            latitude,
            longitude,
            source_url: raw.source_url.unwrap_or_default(),
        })
    }
}

fn valid_latitude(lat: f64) -> bool { lat.is_finite() && (-90.0..=90.0).contains(&lat) }

fn valid_longitude(lon: f64) -> bool { lon.is_finite() && (-180.0..=180.0).contains(&lon) }

/// Validate every record, keeping input order and quarantining the bad ones.
pub fn parse_projects(items: &[Value], diagnostics: &mut Diagnostics) -> Vec<ProjectRecord> {
    items.iter().enumerate()
        .filter_map(|(idx, item)| match ProjectRecord::from_json(item) {
            Ok(record) => Some(record),
            Err(reason) => { diagnostics.record(Source::Projects, idx, reason); None }
        })
        .collect()
}

/// Tabular view of the project records, one row per record.
pub fn projects_table(records: &[ProjectRecord]) -> Result<DataFrame> {
    fn strings(records: &[ProjectRecord], f: impl Fn(&ProjectRecord) -> &str) -> Vec<String> {
        records.iter().map(|r| f(r).to_string()).collect()
    }

    Ok(DataFrame::new(vec![
        Column::new("program_name".into(), strings(records, |r| r.program_name.as_str())),
        Column::new("operator".into(), strings(records, |r| r.operator.as_str())),
        Column::new("delivery_method".into(), strings(records, |r| r.delivery_method.as_str())),
        Column::new("latitude".into(), records.iter().map(|r| r.latitude).collect::<Vec<f64>>()),
        Column::new("longitude".into(), records.iter().map(|r| r.longitude).collect::<Vec<f64>>()),
        Column::new("source_url".into(), strings(records, |r| r.source_url.as_str())),
    ])?)
}

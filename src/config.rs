use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Initial map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for Viewport {
    /// Geographic center of the contiguous US.
    fn default() -> Self {
        Self { latitude: 39.8283, longitude: -98.5795, zoom: 4 }
    }
}

/// Name and default visibility of one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerOptions {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool { true }

impl LayerOptions {
    fn named(name: &str) -> Self {
        Self { name: name.to_string(), visible: true }
    }
}

/// File names of the three inputs inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputNames {
    pub projects: String,
    pub regions: String,
    pub drought: String,
}

impl Default for InputNames {
    fn default() -> Self {
        Self {
            projects: "cloud_seeding_data.json".to_string(),
            regions: "us_states.json".to_string(),
            drought: "drought_data.json".to_string(),
        }
    }
}

/// Full paths of the three inputs. The cache keys on these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InputFiles {
    pub projects: PathBuf,
    pub regions: PathBuf,
    pub drought: PathBuf,
}

impl InputFiles {
    /// Resolve the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        InputNames::default().resolve(dir)
    }
}

impl InputNames {
    pub fn resolve(&self, dir: &Path) -> InputFiles {
        InputFiles {
            projects: dir.join(&self.projects),
            regions: dir.join(&self.regions),
            drought: dir.join(&self.drought),
        }
    }
}

/// Dashboard settings. Every field has a default, so a partial JSON file is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub inputs: InputNames,
    /// Optional score CSV (`state,value`); the built-in table is used otherwise.
    pub scores: Option<PathBuf>,
    pub viewport: Viewport,
    pub basemap: String,
    pub regulatory: LayerOptions,
    pub regulatory_legend: String,
    pub drought: LayerOptions,
    pub projects: LayerOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            inputs: InputNames::default(),
            scores: None,
            viewport: Viewport::default(),
            basemap: "CartoDB positron".to_string(),
            regulatory: LayerOptions::named("Regulatory Heatmap"),
            regulatory_legend: "Regulation level".to_string(),
            drought: LayerOptions::named("Drought Conditions"),
            projects: LayerOptions::named("Cloud Seeding Projects"),
        }
    }
}

impl DashboardConfig {
    /// Read a config file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))
    }
}

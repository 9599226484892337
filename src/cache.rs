//! Loading of the three inputs, and memoization of that load across render passes.

use std::{path::Path, sync::Arc};

use serde_json::Value;

use crate::{
    common::{self, FileStamp, SnapshotHasher},
    config::InputFiles,
    data::{self, Diagnostics, DroughtFeature, ProjectRecord, RegionPolygon, RepairReport},
    LoadError,
};

/// Normalized, validated contents of one set of input files.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub projects: Vec<ProjectRecord>,
    pub regions: Vec<RegionPolygon>,
    pub drought: Vec<DroughtFeature>,
    pub repair: RepairReport,
    pub diagnostics: Diagnostics,
    /// Hex SHA-256 over the three files' bytes.
    pub digest: String,
}

/// Read, parse, repair and validate the inputs. Only whole-file problems are errors.
pub fn load_inputs(files: &InputFiles) -> Result<LoadedData, LoadError> {
    let mut hasher = SnapshotHasher::new();
    let mut diagnostics = Diagnostics::new();

    let bytes = read(&files.projects, "projects", &mut hasher)?;
    let items = common::parse_json_array(&files.projects, &bytes)?;
    let projects = data::parse_projects(&items, &mut diagnostics);

    let bytes = read(&files.regions, "regions", &mut hasher)?;
    let regions_fc = common::parse_feature_collection(&files.regions, &bytes)?;
    let regions = data::parse_regions(&regions_fc, &mut diagnostics);

    let bytes = read(&files.drought, "drought", &mut hasher)?;
    let mut drought_fc: Value = common::parse_feature_collection(&files.drought, &bytes)?;
    let repair = data::repair_feature_collection(&mut drought_fc);
    let drought = data::parse_drought(&drought_fc, &mut diagnostics);

    tracing::info!(
        projects = projects.len(),
        regions = regions.len(),
        drought = drought.len(),
        repaired = repair.repaired,
        skipped = diagnostics.len(),
        "loaded inputs"
    );

    Ok(LoadedData { projects, regions, drought, repair, diagnostics, digest: hasher.finish() })
}

fn read(path: &Path, label: &str, hasher: &mut SnapshotHasher) -> Result<Vec<u8>, LoadError> {
    let bytes = common::read_input_file(path)?;
    hasher.update(label, &bytes);
    Ok(bytes)
}

fn stamp_all(files: &InputFiles) -> Result<[FileStamp; 3], LoadError> {
    Ok([
        common::stamp_file(&files.projects)?,
        common::stamp_file(&files.regions)?,
        common::stamp_file(&files.drought)?,
    ])
}

struct CacheEntry {
    files: InputFiles,
    stamps: [FileStamp; 3],
    data: Arc<LoadedData>,
}

/// Memoizes `load_inputs`, keyed by the input paths and each file's size and mtime.
#[derive(Default)]
pub struct LoadCache {
    entry: Option<CacheEntry>,
}

impl LoadCache {
    pub fn new() -> Self { Self::default() }

    /// Return the cached snapshot if the files are unchanged, loading it otherwise.
    pub fn get_or_load(&mut self, files: &InputFiles) -> Result<Arc<LoadedData>, LoadError> {
        // Stamps are taken before reading so a concurrent write can only cause an extra reload.
        let stamps = match stamp_all(files) {
            Ok(stamps) => stamps,
            Err(e) => { self.entry = None; return Err(e) }
        };

        if let Some(entry) = &self.entry {
            if entry.files == *files && entry.stamps == stamps {
                tracing::debug!(digest = %entry.data.digest, "reusing cached inputs");
                return Ok(entry.data.clone())
            }
        }

        self.entry = None;
        let data = Arc::new(load_inputs(files)?);
        self.entry = Some(CacheEntry { files: files.clone(), stamps, data: data.clone() });
        Ok(data)
    }

    /// Drop the cached snapshot; the next call reloads from disk.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("load cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool { self.entry.is_some() }
}

use std::{path::{Path, PathBuf}, sync::Arc};

use anyhow::Result;
use polars::frame::DataFrame;

use crate::{
    cache::{LoadCache, LoadedData},
    config::{DashboardConfig, InputFiles},
    data::{projects_table, Diagnostics},
    join::ScoreTable,
    layer::{compose, LayerInputs, LayerSet},
    LoadError,
};

/// One dashboard: a data directory, its settings, and the cached load of its inputs.
pub struct Dashboard {
    data_dir: PathBuf,
    config: DashboardConfig,
    files: InputFiles,
    cache: LoadCache,
}

impl Dashboard {
    pub fn new(data_dir: impl Into<PathBuf>, config: DashboardConfig) -> Self {
        let data_dir = data_dir.into();
        let files = config.inputs.resolve(&data_dir);
        Self { data_dir, config, files, cache: LoadCache::new() }
    }

    pub fn config(&self) -> &DashboardConfig { &self.config }

    pub fn files(&self) -> &InputFiles { &self.files }

    /// Normalized inputs, from cache when the files are unchanged.
    pub fn load(&mut self) -> Result<Arc<LoadedData>, LoadError> {
        self.cache.get_or_load(&self.files)
    }

    /// Forget the cached inputs so the next render rereads them.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Score table: the configured CSV (relative to the data directory) or the built-in one.
    pub fn scores(&self, diagnostics: &mut Diagnostics) -> Result<ScoreTable, LoadError> {
        match &self.config.scores {
            Some(path) => ScoreTable::read_csv(&self.resolve(path), diagnostics),
            None => Ok(ScoreTable::builtin()),
        }
    }

    /// Run one render pass: load (or reuse) the inputs and compose the layers.
    pub fn render(&mut self) -> Result<LayerSet, LoadError> {
        let data = self.load()?;
        let mut diagnostics = data.diagnostics.clone();
        let scores = self.scores(&mut diagnostics)?;

        let mut set = compose(&LayerInputs::from_loaded(&data, &scores), &self.config);
        set.source_digest = Some(data.digest.clone());
        diagnostics.extend(&set.diagnostics);
        set.diagnostics = diagnostics;

        tracing::info!(
            layers = set.layers.len(),
            skipped = set.diagnostics.len(),
            digest = %data.digest,
            "composed layer set"
        );
        Ok(set)
    }

    /// The project records as a table, for a tabular view beside the map.
    pub fn projects_table(&mut self) -> Result<DataFrame> {
        let data = self.load()?;
        projects_table(&data.projects)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.data_dir.join(path) }
    }
}

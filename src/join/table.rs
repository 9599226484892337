use std::{fs::File, path::Path};

use ahash::AHashMap;
use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};
use serde::Serialize;

use crate::{common, data::{Diagnostics, Source}, LoadError};

/// Column holding the region name in a score CSV.
pub const KEY_COLUMN: &str = "state";
/// Column holding the ordinal score in a score CSV.
pub const VALUE_COLUMN: &str = "value";

/// Regulatory scores shipped with the dashboard (1 = permissive, 3 = restrictive).
const BUILTIN_SCORES: &[(&str, i64)] = &[
    ("North Dakota", 1),
    ("Utah", 1),
    ("Colorado", 1),
    ("Idaho", 1),
    ("Nevada", 1),
    ("Wyoming", 2),
    ("Texas", 2),
    ("California", 2),
    ("Kansas", 2),
    ("Montana", 3),
];

/// One row of the score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionScore {
    pub region: String,
    pub value: i64,
}

/// Region name -> ordinal score, keyed by exact string.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    rows: Vec<RegionScore>,
    index: AHashMap<String, usize>,
}

impl ScoreTable {
    pub fn new() -> Self { Self::default() }

    /// The built-in table of state regulatory scores.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SCORES.iter().map(|&(name, value)| (name, value)))
    }

    /// Build from (name, score) pairs. The first occurrence of a name wins.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, i64)>) -> Self {
        let mut table = Self::new();
        for (name, value) in pairs {
            let name = name.into();
            if !table.insert(name.clone(), value) {
                tracing::warn!(region = %name, "duplicate score row ignored");
            }
        }
        table
    }

    /// Insert a row; returns `false` (and keeps the existing score) if the name is already present.
    pub fn insert(&mut self, region: String, value: i64) -> bool {
        if self.index.contains_key(&region) { return false }
        self.index.insert(region.clone(), self.rows.len());
        self.rows.push(RegionScore { region, value });
        true
    }

    /// Build from a DataFrame with `state` and `value` columns.
    /// Rows with a null name, a missing value, a non-integer value, or a duplicate name are skipped.
    pub fn from_dataframe(df: &DataFrame, diagnostics: &mut Diagnostics) -> Result<Self> {
        let names = df.column(KEY_COLUMN)
            .with_context(|| format!("[join::table] score table has no `{KEY_COLUMN}` column"))?
            .cast(&DataType::String)?;
        let values = df.column(VALUE_COLUMN)
            .with_context(|| format!("[join::table] score table has no `{VALUE_COLUMN}` column"))?
            .cast(&DataType::Float64)?;

        let mut table = Self::new();
        for (idx, (name, value)) in names.str()?.into_iter().zip(values.f64()?.into_iter()).enumerate() {
            let Some(name) = name else { diagnostics.record(Source::Scores, idx, "missing region name"); continue };
            let Some(value) = value else { diagnostics.record(Source::Scores, idx, format!("missing score for {name:?}")); continue };
            if !value.is_finite() || value.fract() != 0.0 {
                diagnostics.record(Source::Scores, idx, format!("score {value} for {name:?} is not an integer"));
                continue
            }
            if !table.insert(name.to_string(), value as i64) {
                diagnostics.record(Source::Scores, idx, format!("duplicate score for {name:?}"));
            }
        }
        Ok(table)
    }

    /// Read a score CSV from disk.
    pub fn read_csv(path: &Path, diagnostics: &mut Diagnostics) -> Result<Self, LoadError> {
        common::stamp_file(path)?;
        read_score_frame(path)
            .and_then(|df| Self::from_dataframe(&df, diagnostics))
            .map_err(|e| LoadError::Scores { path: path.to_path_buf(), reason: format!("{e:#}") })
    }

    pub fn get(&self, region: &str) -> Option<i64> {
        self.index.get(region).map(|&i| self.rows[i].value)
    }

    pub fn rows(&self) -> &[RegionScore] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Smallest and largest score, if any.
    pub fn domain(&self) -> Option<(i64, i64)> {
        let min = self.rows.iter().map(|r| r.value).min()?;
        let max = self.rows.iter().map(|r| r.value).max()?;
        Some((min, max))
    }
}

/// Parse a score CSV (header row required) into a DataFrame.
fn read_score_frame(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[join::table] cannot open score table {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[join::table] cannot parse {} as CSV", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn builtin_table_matches_dashboard_defaults() {
        let table = ScoreTable::builtin();
        assert_eq!(table.len(), 10);
        assert_eq!(table.get("Montana"), Some(3));
        assert_eq!(table.get("Texas"), Some(2));
        assert_eq!(table.get("Utah"), Some(1));
        assert_eq!(table.domain(), Some((1, 3)));
    }

    #[test]
    fn lookup_is_exact() {
        let table = ScoreTable::from_pairs([("Texas", 2)]);
        assert_eq!(table.get("Texas"), Some(2));
        assert_eq!(table.get("texas"), None);
        assert_eq!(table.get("Texas "), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let table = ScoreTable::from_pairs([("Idaho", 1), ("Idaho", 3)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Idaho"), Some(1));
    }

    #[test]
    fn empty_table_has_no_domain() {
        assert_eq!(ScoreTable::new().domain(), None);
    }

    #[test]
    fn reads_csv_and_skips_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        fs::write(&path, "state,value\nTexas,2\nKansas,2.5\nUtah,1\nTexas,3\n").unwrap();

        let mut diag = Diagnostics::new();
        let table = ScoreTable::read_csv(&path, &mut diag).unwrap();

        assert_eq!(table.rows().iter().map(|r| r.region.as_str()).collect::<Vec<_>>(), vec!["Texas", "Utah"]);
        assert_eq!(table.get("Texas"), Some(2));
        assert_eq!(diag.count(Source::Scores), 2);
    }

    #[test]
    fn missing_csv_is_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoreTable::read_csv(&dir.path().join("none.csv"), &mut Diagnostics::new()).unwrap_err();
        assert!(matches!(err, LoadError::MissingFile { .. }));
    }

    #[test]
    fn csv_without_value_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        fs::write(&path, "state,level\nTexas,2\n").unwrap();
        let err = ScoreTable::read_csv(&path, &mut Diagnostics::new()).unwrap_err();
        assert!(matches!(err, LoadError::Scores { .. }));
        assert!(err.to_string().contains("no `value` column"));
    }
}

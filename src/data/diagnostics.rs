use std::fmt;

use serde::Serialize;

/// Which input a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Projects,
    Regions,
    Drought,
    Scores,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Projects => "projects",
            Source::Regions => "regions",
            Source::Drought => "drought",
            Source::Scores => "scores",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// One unit (record, feature, table row) that was skipped or given a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub source: Source,
    pub index: usize,
    pub reason: String,
}

/// Trace of every unit the pipeline recovered from locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self { Self::default() }

    /// Record an issue and emit it as a warning.
    pub fn record(&mut self, source: Source, index: usize, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(source = source.as_str(), index, "skipping {source} entry #{index}: {reason}");
        self.issues.push(Issue { source, index, reason });
    }

    pub fn extend(&mut self, other: &Diagnostics) {
        self.issues.extend(other.issues.iter().cloned());
    }

    pub fn issues(&self) -> &[Issue] { &self.issues }

    pub fn is_empty(&self) -> bool { self.issues.is_empty() }

    pub fn len(&self) -> usize { self.issues.len() }

    /// Number of issues for one source.
    pub fn count(&self, source: Source) -> usize {
        self.issues.iter().filter(|issue| issue.source == source).count()
    }
}

use std::path::PathBuf;

/// Fatal failures of the load step. Anything that makes a whole data source
/// unavailable ends up here; per-record problems go to `Diagnostics` instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("A data file is missing. Please ensure all input files are in place. Missing file: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("Failed to parse {} as JSON: {source}", .path.display())]
    Parse { path: PathBuf, #[source] source: serde_json::Error },

    #[error("Unexpected content in {}: {reason}", .path.display())]
    Shape { path: PathBuf, reason: String },

    #[error("Failed to read score table {}: {reason}", .path.display())]
    Scores { path: PathBuf, reason: String },
}

impl LoadError {
    /// The input file this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::MissingFile { path }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Shape { path, .. }
            | LoadError::Scores { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message_names_the_file() {
        let err = LoadError::MissingFile { path: PathBuf::from("data/us_states.json") };
        assert!(err.to_string().contains("Missing file: data/us_states.json"));
        assert_eq!(err.path(), std::path::Path::new("data/us_states.json"));
    }
}

pub mod export;
pub mod layers;

use anyhow::Result;
use seedmap::{Dashboard, DashboardConfig};

use crate::cli::{Cli, DataArgs};

/// Build the dashboard described by the global options and the data directory.
pub(crate) fn dashboard(cli: &Cli, args: &DataArgs) -> Result<Dashboard> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(scores) = &cli.scores {
        config.scores = Some(scores.clone());
    }
    let data_dir = args.data.clone().unwrap_or(".".into());
    Ok(Dashboard::new(data_dir, config))
}

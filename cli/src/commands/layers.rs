use anyhow::Result;
use seedmap::{LayerContent, Source};

use crate::cli::{Cli, DataArgs};

pub fn run(cli: &Cli, args: &DataArgs) -> Result<()> {
    let mut dashboard = super::dashboard(cli, args)?;
    tracing::debug!(files = ?dashboard.files(), "[layers] loading inputs");
    let set = dashboard.render()?;

    for layer in &set.layers {
        let detail = match &layer.content {
            LayerContent::Choropleth { regions, .. } => {
                let scored = regions.iter().filter(|r| r.status.score().is_some()).count();
                format!("{} regions, {} scored", regions.len(), scored)
            }
            LayerContent::PolygonOverlay { features, .. } => format!("{} polygons", features.len()),
            LayerContent::MarkerSet { counts, markers } => format!(
                "{} markers ({} airborne, {} ground-based)", markers.len(), counts.airborne, counts.ground_based,
            ),
        };
        let visibility = if layer.visible { "on" } else { "off" };
        println!("{:<28} [{visibility}] {detail}", layer.name);
    }

    for source in [Source::Projects, Source::Regions, Source::Drought, Source::Scores] {
        let n = set.diagnostics.count(source);
        if n > 0 { println!("skipped {n} {source} entries") }
    }
    Ok(())
}

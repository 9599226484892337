use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::{Cli, ExportArgs};

pub fn run(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let mut dashboard = super::dashboard(cli, &args.data)?;
    let set = dashboard.render()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if args.pretty {
        serde_json::to_writer_pretty(&mut out, &set)
    } else {
        serde_json::to_writer(&mut out, &set)
    };
    written.context("[export] Failed to write layer set")?;
    writeln!(out)?;
    Ok(())
}

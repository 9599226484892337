use std::path::PathBuf;

/// Cloud-seeding map layer pipeline (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "seedmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Dashboard settings (JSON); defaults are used for anything left out
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Score table CSV with `state,value` columns, overriding the built-in table
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub scores: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print a one-line summary of every composed layer
    Layers(DataArgs),

    /// Write the composed layer set as JSON to stdout
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Directory holding the project, region and drought files, defaults to "."
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "folders2csv")]
#[command(about = "Catalog Audio Archive mastering folders into a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List mounted Audio Archive drives with their folder counts
    Drives,
    /// Show details for a single drive
    Info {
        /// Volume name as mounted, e.g. "Audio Archive 01"
        volume: String,
    },
    /// Scan drives and merge their mastering folders into the catalog
    Scan(ScanArgs),
    /// Check that a CSV file can be used as the catalog
    Validate {
        /// Catalog path (defaults to the configured catalog)
        path: Option<String>,
    },
    /// Print catalog rows, optionally filtered
    Show(ShowArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Catalog to create or update (defaults to the configured catalog)
    #[arg(long)]
    pub csv: Option<String>,
    /// Scan every mounted Audio Archive drive
    #[arg(long)]
    pub all: bool,
    /// Do not ask for confirmation when no drives are named
    #[arg(long, short)]
    pub yes: bool,
    /// Volume names to scan
    pub volumes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Catalog to read (defaults to the configured catalog)
    #[arg(long)]
    pub csv: Option<String>,
    /// Only show rows whose folder or drive contains this text
    #[arg(long, short)]
    pub search: Option<String>,
}

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for kladr-cli
#[derive(Debug, Parser)]
#[command(
    name = "kladr",
    version,
    about = "Resolve and search KLADR address codes"
)]
pub struct CliArgs {
    /// Path to the dataset: a compiled snapshot or a source .json / .json.gz
    /// (default: data/kladr.bin inside kladr-core)
    #[arg(short = 'd', long = "db", global = true)]
    pub db: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Postal index and names of every level of a code
    Info {
        /// Address code, 5 digits or more (e.g. 7700000001000)
        code: String,

        /// Print the resolution as JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// List objects of one level under a code, optionally filtered by name
    Query {
        /// Scope code ("" lists all regions)
        code: String,

        /// region, district, town, point, street or postalcode
        #[arg(value_name = "TYPE")]
        level: String,

        /// Substring to look for (case-sensitive)
        #[arg(value_name = "NAME_PATTERN", default_value = "")]
        pattern: String,
    },

    /// Show record counts per table
    Stats,

    /// Compile a source JSON dataset into a snapshot (gzipped if OUT ends in .gz)
    Build {
        source: PathBuf,
        out: PathBuf,
    },
}

//! kladr: command-line interface for kladr-core
//!
//! Resolves KLADR address codes against a pre-built classifier and lists
//! the objects of one hierarchy level under a code.
//!
//! Usage examples
//! --------------
//!
//! - Postal index and names of every level
//!   $ kladr info 7700000001000
//!
//! - All regions, then the points of a town matching a substring
//!   $ kladr query "" region
//!   $ kladr query 02000005 point Сал
//!
//! - Postal indices under a house prefix
//!   $ kladr query 77000000000021200 postalcode 387
//!
//! - Compile the source dataset once
//!   $ kladr build kladr.json.gz kladr.bin.gz
//!
//! Exit status is 0 on success, including codes that resolve to nothing,
//! and 1 on any error.
mod args;

use crate::args::{CliArgs, Commands};
#[cfg(feature = "builder")]
use anyhow::Context;
use clap::Parser;
use kladr_core::{KladrDb, StoreConfig, StoreSource};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let status = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(status);
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let store = args
        .db
        .map(StoreConfig::new)
        .unwrap_or_else(StoreConfig::default_location);
    tracing::debug!(db = %store.path.display(), "using dataset");

    match args.command {
        Commands::Info { code, json } => {
            let resolution = kladr_core::resolve(&store, &code)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                for (name, value) in resolution.fields() {
                    println!("{name}\t{value}");
                }
            }
        }

        Commands::Query {
            code,
            level,
            pattern,
        } => {
            for row in kladr_core::search(&store, &code, &level, &pattern)? {
                println!("{}\t{}", row.code, row.value);
            }
        }

        Commands::Stats => {
            let db: KladrDb = store.acquire()?;
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Localities: {}", stats.localities);
            println!("  Streets: {}", stats.streets);
            println!("  Houses: {}", stats.houses);
        }

        Commands::Build { source, out } => build(&source, &out)?,
    }

    Ok(())
}

#[cfg(feature = "builder")]
fn build(source: &Path, out: &Path) -> anyhow::Result<()> {
    let stats = kladr_core::loader::builder::build_database(source, out)
        .with_context(|| format!("building {}", out.display()))?;
    println!(
        "Wrote {} ({} regions, {} localities, {} streets, {} houses)",
        out.display(),
        stats.regions,
        stats.localities,
        stats.streets,
        stats.houses
    );
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_source: &Path, _out: &Path) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}

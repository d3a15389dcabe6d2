// crates/kladr-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (compiled snapshot vs source JSON).

use crate::error::Result;
use crate::model::KladrDb;
use crate::traits::StoreSource;
use std::path::{Path, PathBuf};
use tracing::debug;

mod common_io;
mod standard;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "builder")]
pub mod builder;

/// Where the classifier lives. Passed explicitly to every query; each call
/// loads the store, uses it and drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `data/kladr.bin` next to this crate.
    pub fn default_location() -> Self {
        Self::new(KladrDb::default_data_dir().join(KladrDb::default_dataset_filename()))
    }
}

impl StoreSource for StoreConfig {
    type Store<'a> = KladrDb;

    fn acquire(&self) -> Result<KladrDb> {
        KladrDb::load_from_path(&self.path)
    }
}

impl KladrDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "kladr.bin"
    }

    /// Loads a compiled snapshot, or a source JSON (`.json` / `.json.gz`).
    ///
    /// With the `builder` feature a JSON source goes through its compiled
    /// cache, rebuilding it when the source is newer.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !is_json_source(path) {
            return Self::load_binary_file(path);
        }
        debug!(path = %path.display(), "loading source JSON");

        #[cfg(feature = "builder")]
        {
            Self::load_via_builder(path)
        }

        #[cfg(all(feature = "json", not(feature = "builder")))]
        {
            Self::load_raw_json(path)
        }

        #[cfg(not(feature = "json"))]
        {
            Err(crate::error::KladrError::InvalidData(format!(
                "{} is a JSON source but the 'json' feature is disabled",
                path.display()
            )))
        }
    }
}

fn is_json_source(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    name.ends_with(".json") || name.ends_with(".json.gz")
}

// crates/kladr-core/src/loader/standard.rs
use super::common_io;
use crate::error::{KladrError, Result};
use crate::model::KladrDb;
use std::io::Read;
use std::path::Path;
use tracing::info;

impl KladrDb {
    /// **Standard Loader:** reads a compiled snapshot (optionally gzipped).
    pub fn load_binary_file(path: &Path) -> Result<Self> {
        let mut reader = common_io::open_stream(path)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(KladrError::Io)?;

        let db = Self::from_bytes(&bytes)?;
        let stats = db.stats();
        info!(
            path = %path.display(),
            regions = stats.regions,
            localities = stats.localities,
            streets = stats.streets,
            houses = stats.houses,
            "snapshot loaded"
        );
        Ok(db)
    }
}

// crates/kladr-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use crate::common::DbStats;
use crate::error::{KladrError, Result};
use crate::model::{KladrDb, CACHE_SUFFIX};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Decided by the file name, so the loader can tell them apart again.
    pub fn for_path(path: &Path) -> Self {
        if common_io::is_gzip(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// BUILDER
// -----------------------------------------------------------------------------

/// Compiles a source JSON dataset into a snapshot at `out_path`.
///
/// The snapshot is gzipped when `out_path` ends in `.gz`.
pub fn build_database(source_path: &Path, out_path: &Path) -> Result<DbStats> {
    let compression = CompressionMode::for_path(out_path);
    info!(
        source = %source_path.display(),
        out = %out_path.display(),
        ?compression,
        "building snapshot"
    );
    let db = KladrDb::load_raw_json(source_path)?;
    db.save_as(out_path)?;
    Ok(db.stats())
}

// -----------------------------------------------------------------------------
// RUNTIME HELPER
// -----------------------------------------------------------------------------

impl KladrDb {
    /// **Smart Load:** uses the compiled cache next to `path` when it is
    /// fresh, otherwise parses the source and refreshes the cache.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        if Self::is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(db) => return Ok(db),
                Err(e) => debug!(cache = %cache_path.display(), error = %e, "stale or broken cache"),
            }
        }

        let db = Self::load_raw_json(path)?;

        // Best-effort: a read-only data directory must not fail the query.
        if let Err(e) = write_snapshot_file(&cache_path, &db, CompressionMode::for_path(&cache_path)) {
            warn!(cache = %cache_path.display(), error = %e, "could not write snapshot cache");
        }

        Ok(db)
    }

    /// Writes a snapshot of this database, gzipped when `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_snapshot_file(path, self, CompressionMode::for_path(path))
    }

    fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
        let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match fs::metadata(source_path).and_then(|m| m.modified()) {
            Ok(source_time) => source_time <= cache_time,
            Err(_) => true,
        }
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

fn write_snapshot_file(path: &Path, db: &KladrDb, compression: CompressionMode) -> Result<()> {
    let file = File::create(path).map_err(KladrError::Io)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                db.write_snapshot(&mut encoder).map_err(KladrError::Bincode)?;
                writer = encoder.finish().map_err(KladrError::Io)?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(KladrError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            db.write_snapshot(&mut writer).map_err(KladrError::Bincode)?;
        }
    }

    writer.flush().map_err(KladrError::Io)?;
    Ok(())
}

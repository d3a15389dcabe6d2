// crates/kladr-core/src/loader/json.rs
#![cfg(feature = "json")]

use super::common_io;
use crate::error::{KladrError, Result};
use crate::model::KladrDb;
use crate::raw::TablesRaw;
use std::path::Path;

impl KladrDb {
    /// Parses a source JSON dataset directly, without any cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        let raw: TablesRaw = serde_json::from_reader(reader).map_err(KladrError::Json)?;
        Self::from_raw(raw)
    }
}

// crates/kladr-core/src/model/load.rs
use super::domain::KladrDb;
use crate::error::{KladrError, Result};
use bincode::Options;
use std::io::Write;

/// Upper bound on a decoded snapshot. The full classifier is well below it;
/// anything larger is refused instead of exhausting memory.
const SNAPSHOT_LIMIT: u64 = 2 * 1024 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl KladrDb {
    /// Reconstructs the database from a compiled snapshot.
    ///
    /// The decoded tables are held to the same code rules as a JSON source,
    /// so a tampered or foreign snapshot fails here with
    /// [`KladrError::InvalidData`] instead of at query time.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let db: Self = snapshot_options()
            .deserialize(data)
            .map_err(KladrError::Bincode)?;
        db.validate()?;
        Ok(db)
    }

    /// Serializes the database into the snapshot encoding read by
    /// [`KladrDb::from_bytes`].
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self)
    }

    pub(crate) fn write_snapshot<W: Write>(&self, writer: W) -> std::result::Result<(), bincode::Error> {
        snapshot_options().serialize_into(writer, self)
    }
}

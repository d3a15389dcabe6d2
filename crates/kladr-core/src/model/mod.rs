// crates/kladr-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod load;
pub mod store;

pub use domain::{KladrDb, LevelRecord, Table};

/// Suffix appended to a source file name for its compiled snapshot.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "kladr.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "kladr.bin.gz";

// crates/kladr-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::KladrDb::stats`], these are per-table record counts
/// of the materialized in-memory store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub localities: usize,
    pub streets: usize,
    pub houses: usize,
}

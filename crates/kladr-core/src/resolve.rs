// crates/kladr-core/src/resolve.rs

//! # Postal resolution
//!
//! The postal index is looked up from the most detailed address down,
//! stopping at the first level that has anything under the code's prefix.
//! Postal indices are never assigned to whole regions, so the cascade ends
//! at the district level.

use crate::error::Result;
use crate::model::LevelRecord;
use crate::schema::{Grain, Level};
use crate::traits::LevelStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One level of the postal cascade.
#[derive(Debug, Clone, Copy)]
pub struct CascadeStep {
    pub grain: Grain,
    /// Level whose boundary cuts the prefix; also picks the table.
    pub level: Level,
    /// Keep only records whose own `level` segment is non-zero. Needed on the
    /// shared locality table, where a prefix also covers coarser records.
    pub require_segment: bool,
    /// Rows collapse to distinct `(prefix, index)` pairs in search output.
    pub distinct: bool,
}

/// Most specific first.
pub const POSTAL_CASCADE: [CascadeStep; 5] = [
    CascadeStep {
        grain: Grain::House,
        level: Level::House,
        require_segment: false,
        distinct: true,
    },
    CascadeStep {
        grain: Grain::Street,
        level: Level::Street,
        require_segment: false,
        distinct: true,
    },
    CascadeStep {
        grain: Grain::Point,
        level: Level::Point,
        require_segment: true,
        distinct: false,
    },
    CascadeStep {
        grain: Grain::Town,
        level: Level::Town,
        require_segment: true,
        distinct: false,
    },
    CascadeStep {
        grain: Grain::District,
        level: Level::District,
        require_segment: true,
        distinct: false,
    },
];

impl CascadeStep {
    /// The code prefix this step scans under, or `None` if the code does
    /// not reach the step's boundary.
    pub fn prefix<'c>(&self, code: &'c str) -> Option<&'c str> {
        code.get(..self.level.boundary())
    }

    /// Records this step yields for `code`, in store order.
    pub fn matches<S: LevelStore + ?Sized>(&self, store: &S, code: &str) -> Result<Vec<LevelRecord>> {
        let Some(prefix) = self.prefix(code) else {
            return Ok(Vec::new());
        };
        let mut rows = store.prefix_range(self.level.table(), prefix)?;
        if self.require_segment {
            rows.retain(|r| self.level.is_specified_in(&r.code));
        }
        debug!(grain = %self.grain, prefix, hits = rows.len(), "postal cascade step");
        Ok(rows)
    }
}

/// Runs the cascade and returns the first step with at least one record.
///
/// A store error aborts the remaining steps.
pub fn first_grain<S: LevelStore + ?Sized>(
    store: &S,
    code: &str,
) -> Result<Option<(&'static CascadeStep, Vec<LevelRecord>)>> {
    for step in POSTAL_CASCADE.iter() {
        let rows = step.matches(store, code)?;
        if !rows.is_empty() {
            return Ok(Some((step, rows)));
        }
    }
    Ok(None)
}

/// Postal index of a code and the level it was found at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalMatch {
    pub index: String,
    pub grain: Grain,
}

/// Resolves the postal index of `code`.
///
/// When several records match at the winning level the first one in store
/// order (ascending code) is the representative, even if the others carry
/// different indices. Codes shorter than a step's boundary skip that step.
pub fn resolve_postal<S: LevelStore + ?Sized>(store: &S, code: &str) -> Result<PostalMatch> {
    let Some((step, rows)) = first_grain(store, code)? else {
        debug!(code, "no postal index at any grain");
        return Ok(PostalMatch::default());
    };
    let index = rows
        .into_iter()
        .next()
        .map(|r| r.index)
        .unwrap_or_default();
    Ok(PostalMatch {
        index,
        grain: step.grain,
    })
}

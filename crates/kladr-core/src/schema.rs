// crates/kladr-core/src/schema.rs

//! # Code schema
//!
//! A KLADR code is a path through the hierarchy written as fixed-width digit
//! segments:
//!
//! ```text
//! СС РРР ГГГ ППП УУУУ ДД КК
//! 77 000 000 001 0000 00 00
//! │  │   │   │   │    │  └ wing       (..19)
//! │  │   │   │   │    └─── house      (..17)
//! │  │   │   │   └──────── street     (..15)
//! │  │   │   └──────────── point      (..11)
//! │  │   └──────────────── town       (..8)
//! │  └──────────────────── district   (..5)
//! └─────────────────────── region     (..2)
//! ```
//!
//! Stored records of the region, locality and street tables append a 2-digit
//! actuality suffix; `"00"` marks the current record.

use crate::digits::{self, is_zero};
use crate::error::{KladrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Minimum length of a resolvable code (region + district).
pub const MIN_CODE_LEN: usize = 5;

/// Actuality suffix of the currently valid record.
pub const ACTUAL: &str = "00";

/// Hierarchy levels in canonical (coarse to fine) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Region,
    District,
    Town,
    Point,
    Street,
    House,
    Wing,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Region,
        Level::District,
        Level::Town,
        Level::Point,
        Level::Street,
        Level::House,
        Level::Wing,
    ];

    /// Cumulative digit boundary of this level.
    pub const fn boundary(self) -> usize {
        match self {
            Level::Region => 2,
            Level::District => 5,
            Level::Town => 8,
            Level::Point => 11,
            Level::Street => 15,
            Level::House => 17,
            Level::Wing => 19,
        }
    }

    /// The digits this level owns within a code.
    pub const fn segment(self) -> Range<usize> {
        let start = match self.parent() {
            Some(p) => p.boundary(),
            None => 0,
        };
        start..self.boundary()
    }

    pub const fn parent(self) -> Option<Level> {
        match self {
            Level::Region => None,
            Level::District => Some(Level::Region),
            Level::Town => Some(Level::District),
            Level::Point => Some(Level::Town),
            Level::Street => Some(Level::Point),
            Level::House => Some(Level::Street),
            Level::Wing => Some(Level::House),
        }
    }

    /// Table holding the records of this level.
    pub const fn table(self) -> TableKind {
        match self {
            Level::Region => TableKind::Region,
            Level::District | Level::Town | Level::Point => TableKind::Kladr,
            Level::Street => TableKind::Street,
            Level::House | Level::Wing => TableKind::Doma,
        }
    }

    /// Field name used in resolution output.
    pub const fn field_name(self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::District => "district",
            Level::Town => "town",
            Level::Point => "point",
            Level::Street => "street",
            Level::House => "doma",
            Level::Wing => "korp",
        }
    }

    /// Field name of the abbreviation column in resolution output.
    pub const fn socr_field_name(self) -> &'static str {
        match self {
            Level::Region => "region_socr",
            Level::District => "district_socr",
            Level::Town => "town_socr",
            Level::Point => "point_socr",
            Level::Street => "street_socr",
            Level::House => "doma_socr",
            Level::Wing => "korp_socr",
        }
    }

    /// `true` if this level's own segment of `code` is present and non-zero.
    pub fn is_specified_in(self, code: &str) -> bool {
        let seg = self.segment();
        code.len() >= seg.end && !is_zero(&code[seg])
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Region => "region",
            Level::District => "district",
            Level::Town => "town",
            Level::Point => "point",
            Level::Street => "street",
            Level::House => "house",
            Level::Wing => "wing",
        })
    }
}

/// Granularity at which a postal index was found.
///
/// Ordered from coarse to fine, so `a < b` means `b` is more specific.
/// Serializes to the same string as the `postaltype` field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Grain {
    #[default]
    #[serde(rename = "")]
    None,
    District,
    Town,
    Point,
    Street,
    #[serde(rename = "doma")]
    House,
}

impl Grain {
    /// Value printed in the `postaltype` field; `None` prints as empty.
    pub const fn as_str(self) -> &'static str {
        match self {
            Grain::None => "",
            Grain::District => "district",
            Grain::Town => "town",
            Grain::Point => "point",
            Grain::Street => "street",
            Grain::House => "doma",
        }
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four physical tables of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Region,
    Kladr,
    Street,
    Doma,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Region,
        TableKind::Kladr,
        TableKind::Street,
        TableKind::Doma,
    ];

    /// Digits of the hierarchy code stored in this table (without suffix).
    pub const fn path_width(self) -> usize {
        match self {
            TableKind::Region | TableKind::Kladr => Level::Point.boundary(),
            TableKind::Street => Level::Street.boundary(),
            TableKind::Doma => Level::Wing.boundary(),
        }
    }

    pub const fn has_actuality(self) -> bool {
        !matches!(self, TableKind::Doma)
    }

    /// Full width of every stored code in this table.
    pub const fn code_width(self) -> usize {
        if self.has_actuality() {
            self.path_width() + ACTUAL.len()
        } else {
            self.path_width()
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TableKind::Region => "region",
            TableKind::Kladr => "kladr",
            TableKind::Street => "street",
            TableKind::Doma => "doma",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Levels accepted by prefix search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchLevel {
    Named(Level),
    PostalCode,
}

impl FromStr for SearchLevel {
    type Err = KladrError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "region" => SearchLevel::Named(Level::Region),
            "district" => SearchLevel::Named(Level::District),
            "town" => SearchLevel::Named(Level::Town),
            "point" => SearchLevel::Named(Level::Point),
            "street" => SearchLevel::Named(Level::Street),
            "postalcode" => SearchLevel::PostalCode,
            other => {
                return Err(KladrError::Usage(format!(
                    "Unknown type : {other}\nAllowed types: region, town, point, district, street, postalcode"
                )))
            }
        })
    }
}

/// Checks a code passed to resolution.
pub fn validate(code: &str) -> Result<()> {
    if code.len() < MIN_CODE_LEN {
        return Err(KladrError::InputTooShort {
            code: code.to_owned(),
        });
    }
    validate_digits(code)
}

/// Checks a search scope: may be empty, otherwise digits only.
pub fn validate_scope(scope: &str) -> Result<()> {
    if scope.is_empty() {
        return Ok(());
    }
    validate_digits(scope)
}

fn validate_digits(code: &str) -> Result<()> {
    if digits::is_digits(code) {
        Ok(())
    } else {
        Err(KladrError::Usage(format!(
            "Code must contain digits only: {code}"
        )))
    }
}

/// Leading `n` digits of `code`, or the whole code if it is shorter.
pub fn head(code: &str, n: usize) -> &str {
    &code[..code.len().min(n)]
}

/// Key of the current record of `level` for `code`: the code cut at the
/// level boundary, zero-padded to the table's path width, plus `"00"`.
///
/// Returns `None` if `code` does not reach the level boundary.
pub fn actual_key(code: &str, level: Level) -> Option<String> {
    let b = level.boundary();
    if code.len() < b {
        return None;
    }
    let table = level.table();
    let mut key = digits::fit(&code[..b], table.path_width());
    if table.has_actuality() {
        key.push_str(ACTUAL);
    }
    Some(key)
}

/// `true` if a stored `code` of `level`'s table is a real, current node of
/// exactly that level: its own segment is non-zero and everything deeper up
/// to the table's path width is zero.
pub fn is_node_of(level: Level, code: &str) -> bool {
    let table = level.table();
    if code.len() != table.code_width() {
        return false;
    }
    let path = &code[..table.path_width()];
    if table.has_actuality() && &code[table.path_width()..] != ACTUAL {
        return false;
    }
    level.is_specified_in(path) && is_zero(&path[level.boundary()..])
}

// crates/kladr-core/src/lib.rs

//! # kladr-core
//!
//! Resolves KLADR address codes into a postal index and the names of every
//! hierarchy level, and searches the children of a code at one level.
//!
//! ```rust
//! use kladr_core::raw::{RecordRaw, TablesRaw};
//! use kladr_core::{resolve, search, KladrDb};
//!
//! let db = KladrDb::from_raw(TablesRaw {
//!     region: vec![RecordRaw::new("7700000000000", "Москва", "г")],
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let r = resolve(&db, "7700000001").unwrap();
//! assert_eq!(r.address.region.name, "Москва");
//! assert_eq!(r.postal.index, "");
//!
//! let rows = search(&db, "", "region", "").unwrap();
//! assert_eq!(rows[0].value, "Москва г");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod digits;
pub mod error;
pub mod expand;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod schema;
pub mod search;
pub mod traits;
// Shared Raw Input (used by the loader and by fixtures)
pub mod raw;

// Re-exports
pub use crate::api::{resolve, search, Resolution};
pub use crate::common::DbStats;
pub use crate::error::{ErrorKind, KladrError, Result};
pub use crate::expand::{Address, Designation};
pub use crate::loader::StoreConfig;
pub use crate::model::{KladrDb, LevelRecord, Table};
pub use crate::resolve::PostalMatch;
pub use crate::schema::{Grain, Level, SearchLevel, TableKind};
pub use crate::search::SearchRow;
pub use crate::traits::{LevelStore, StoreSource};

// crates/kladr-core/src/traits.rs
use crate::error::Result;
use crate::model::LevelRecord;
use crate::schema::TableKind;

/// Read-only access to the per-level sorted tables.
///
/// The resolver, the expander and the search engine only ever talk to the
/// dataset through this trait, so any engine that keeps the four tables
/// sorted by code can back them. [`crate::KladrDb`] is the in-memory
/// implementation.
///
/// # Examples
///
/// ```rust
/// use kladr_core::raw::{RecordRaw, TablesRaw};
/// use kladr_core::{KladrDb, LevelStore, TableKind};
///
/// let raw = TablesRaw {
///     region: vec![RecordRaw::new("7700000000000", "Москва", "г")],
///     ..Default::default()
/// };
/// let db = KladrDb::from_raw(raw).unwrap();
///
/// let hit = db.exact_lookup(TableKind::Region, "7700000000000").unwrap();
/// assert_eq!(hit.unwrap().name, "Москва");
/// assert_eq!(db.prefix_range(TableKind::Region, "78").unwrap().len(), 0);
/// ```
pub trait LevelStore {
    /// The record stored under exactly `key`, if any. Absence is not an error.
    fn exact_lookup(&self, table: TableKind, key: &str) -> Result<Option<LevelRecord>>;

    /// Every record whose code, read as a non-negative integer, lies in
    /// `[prefix * 10^k, (prefix + 1) * 10^k)` where `k` is the number of
    /// digits the stored code has beyond `prefix`. Order is store-defined.
    fn prefix_range(&self, table: TableKind, prefix: &str) -> Result<Vec<LevelRecord>>;
}

impl<T: LevelStore + ?Sized> LevelStore for &T {
    fn exact_lookup(&self, table: TableKind, key: &str) -> Result<Option<LevelRecord>> {
        (**self).exact_lookup(table, key)
    }

    fn prefix_range(&self, table: TableKind, prefix: &str) -> Result<Vec<LevelRecord>> {
        (**self).prefix_range(table, prefix)
    }
}

/// Something a query can acquire a [`LevelStore`] from for the duration of
/// one call.
///
/// The store handle is dropped when the call returns, on every path.
pub trait StoreSource {
    type Store<'a>: LevelStore
    where
        Self: 'a;

    fn acquire(&self) -> Result<Self::Store<'_>>;
}

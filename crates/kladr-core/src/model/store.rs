// crates/kladr-core/src/model/store.rs
use super::domain::{KladrDb, LevelRecord};
use crate::error::Result;
use crate::schema::TableKind;
use crate::traits::{LevelStore, StoreSource};

impl LevelStore for KladrDb {
    fn exact_lookup(&self, table: TableKind, key: &str) -> Result<Option<LevelRecord>> {
        Ok(self.table(table).get(key).cloned())
    }

    fn prefix_range(&self, table: TableKind, prefix: &str) -> Result<Vec<LevelRecord>> {
        Ok(self.table(table).range(prefix).cloned().collect())
    }
}

/// A loaded database lends itself to every call.
impl StoreSource for KladrDb {
    type Store<'a> = &'a KladrDb;

    fn acquire(&self) -> Result<Self::Store<'_>> {
        Ok(self)
    }
}

// crates/kladr-core/src/model/domain.rs
use crate::common::DbStats;
use crate::digits;
use crate::error::{KladrError, Result};
use crate::schema::TableKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// One stored row of a classifier table.
///
/// `index` and `korp` are empty where the table has no such column or the
/// row carries no value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub code: String,
    pub name: String,
    pub socr: String,
    pub index: String,
    pub korp: String,
}

impl LevelRecord {
    /// `name socr`, the form shown in search results.
    pub fn display(&self) -> String {
        format!("{} {}", self.name, self.socr)
    }
}

/// A sorted table keyed by fixed-width code.
///
/// Several rows may share a code (house tables do); they are kept in load
/// order under that code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    kind: TableKind,
    rows: BTreeMap<String, Vec<LevelRecord>>,
    len: usize,
}

impl Table {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            rows: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a row; its code must be all digits and exactly the table width.
    pub fn insert(&mut self, record: LevelRecord) -> Result<()> {
        check_code(self.kind, &record.code)?;
        self.rows
            .entry(record.code.clone())
            .or_default()
            .push(record);
        self.len += 1;
        Ok(())
    }

    /// First row stored under exactly `code`.
    pub fn get(&self, code: &str) -> Option<&LevelRecord> {
        self.rows.get(code).and_then(|v| v.first())
    }

    /// Rows whose code starts with `prefix`, in store order.
    pub fn range<'a>(&'a self, prefix: &str) -> Box<dyn Iterator<Item = &'a LevelRecord> + 'a> {
        let Some((lower, upper)) = digits::prefix_bounds(prefix, self.kind.code_width()) else {
            return Box::new(std::iter::empty());
        };
        let upper = match upper {
            Some(u) => Bound::Excluded(u),
            None => Bound::Unbounded,
        };
        Box::new(
            self.rows
                .range::<String, _>((Bound::Included(lower), upper))
                .flat_map(|(_, rows)| rows.iter()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelRecord> {
        self.rows.values().flatten()
    }

    /// Re-checks a table that did not go through [`Table::insert`], such as
    /// one decoded from a snapshot.
    fn validate(&self, expected: TableKind) -> Result<()> {
        if self.kind != expected {
            return Err(KladrError::InvalidData(format!(
                "table {expected} is stored as {}",
                self.kind
            )));
        }
        let mut count = 0;
        for (code, rows) in &self.rows {
            check_code(self.kind, code)?;
            if rows.is_empty() {
                return Err(KladrError::InvalidData(format!(
                    "table {}: code {code:?} has no rows",
                    self.kind
                )));
            }
            if let Some(r) = rows.iter().find(|r| &r.code != code) {
                return Err(KladrError::InvalidData(format!(
                    "table {}: row {:?} filed under {code:?}",
                    self.kind, r.code
                )));
            }
            count += rows.len();
        }
        if count != self.len {
            return Err(KladrError::InvalidData(format!(
                "table {}: {count} rows, header says {}",
                self.kind, self.len
            )));
        }
        Ok(())
    }
}

fn check_code(kind: TableKind, code: &str) -> Result<()> {
    let width = kind.code_width();
    if code.len() != width || !digits::is_digits(code) {
        return Err(KladrError::InvalidData(format!(
            "table {kind}: code {code:?} is not a {width}-digit code"
        )));
    }
    Ok(())
}

/// The in-memory classifier: one table per [`TableKind`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KladrDb {
    pub region: Table,
    pub kladr: Table,
    pub street: Table,
    pub doma: Table,
}

impl Default for KladrDb {
    fn default() -> Self {
        Self {
            region: Table::new(TableKind::Region),
            kladr: Table::new(TableKind::Kladr),
            street: Table::new(TableKind::Street),
            doma: Table::new(TableKind::Doma),
        }
    }
}

impl KladrDb {
    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Region => &self.region,
            TableKind::Kladr => &self.kladr,
            TableKind::Street => &self.street,
            TableKind::Doma => &self.doma,
        }
    }

    pub fn table_mut(&mut self, kind: TableKind) -> &mut Table {
        match kind {
            TableKind::Region => &mut self.region,
            TableKind::Kladr => &mut self.kladr,
            TableKind::Street => &mut self.street,
            TableKind::Doma => &mut self.doma,
        }
    }

    /// Every table sits in its own slot and holds only well-formed codes.
    pub fn validate(&self) -> Result<()> {
        for kind in TableKind::ALL {
            self.table(kind).validate(kind)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            regions: self.region.len(),
            localities: self.kladr.len(),
            streets: self.street.len(),
            houses: self.doma.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, name: &str) -> LevelRecord {
        LevelRecord {
            code: code.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn insert_rejects_wrong_width() {
        let mut t = Table::new(TableKind::Kladr);
        assert!(t.insert(rec("77000", "short")).is_err());
        assert!(t.insert(rec("77000000010x0", "letters")).is_err());
        assert!(t.insert(rec("7700000001000", "ok")).is_ok());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn range_scans_exact_prefix_only() {
        let mut t = Table::new(TableKind::Kladr);
        for (code, name) in [
            ("7600000000000", "a"),
            ("7700000001000", "b"),
            ("7700000001051", "c"),
            ("7700000002000", "d"),
            ("9999999999900", "e"),
        ] {
            t.insert(rec(code, name)).unwrap();
        }
        let names: Vec<&str> = t.range("77000000010").map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);

        let names: Vec<&str> = t.range("99").map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["e"]);

        assert_eq!(t.range("").count(), 5);
        assert_eq!(t.range("77000000010000").count(), 0);
    }

    #[test]
    fn duplicate_codes_keep_load_order() {
        let mut t = Table::new(TableKind::Doma);
        t.insert(rec("0200000500000410003", "first")).unwrap();
        t.insert(rec("0200000500000410003", "second")).unwrap();
        let names: Vec<&str> = t
            .range("0200000500000410003")
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(t.get("0200000500000410003").unwrap().name, "first");
    }
}

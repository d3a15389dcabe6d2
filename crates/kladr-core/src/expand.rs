// crates/kladr-core/src/expand.rs

//! # Address expansion
//!
//! Names every level of a code independently of where the postal cascade
//! stopped. The result always has all seven levels; a level without a
//! record stays `("", "")`, and callers must print it as such.

use crate::error::Result;
use crate::schema::{self, Level};
use crate::traits::LevelStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display name and abbreviation (`socr`) of one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub name: String,
    pub socr: String,
}

impl Designation {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.socr.is_empty()
    }
}

/// All seven levels of an address, coarse to fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub region: Designation,
    pub district: Designation,
    pub town: Designation,
    pub point: Designation,
    pub street: Designation,
    pub house: Designation,
    pub wing: Designation,
}

impl Address {
    pub fn get(&self, level: Level) -> &Designation {
        match level {
            Level::Region => &self.region,
            Level::District => &self.district,
            Level::Town => &self.town,
            Level::Point => &self.point,
            Level::Street => &self.street,
            Level::House => &self.house,
            Level::Wing => &self.wing,
        }
    }

    fn slot(&mut self, level: Level) -> &mut Designation {
        match level {
            Level::Region => &mut self.region,
            Level::District => &mut self.district,
            Level::Town => &mut self.town,
            Level::Point => &mut self.point,
            Level::Street => &mut self.street,
            Level::House => &mut self.house,
            Level::Wing => &mut self.wing,
        }
    }

    /// Exactly seven entries, in [`Level::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &Designation)> {
        Level::ALL.into_iter().map(move |l| (l, self.get(l)))
    }
}

/// Looks up every level of `code`.
///
/// Region to street use the current record (`"00"` actuality) at the level's
/// exact key. Houses aggregate all groups under the 17-digit prefix; wings
/// join the `korp` values stored under the full 19-digit code.
pub fn expand<S: LevelStore + ?Sized>(store: &S, code: &str) -> Result<Address> {
    let mut address = Address::default();
    for level in Level::ALL {
        let found = match level {
            Level::House => house_groups(store, code)?,
            Level::Wing => wings(store, code)?,
            _ => named(store, code, level)?,
        };
        debug!(level = %level, found = found.is_some(), "expanded level");
        if let Some(d) = found {
            *address.slot(level) = d;
        }
    }
    Ok(address)
}

fn named<S: LevelStore + ?Sized>(store: &S, code: &str, level: Level) -> Result<Option<Designation>> {
    // A zero segment is an unpopulated branch, and its key would collide
    // with the parent's record.
    if !Level::Region.is_specified_in(code) || !level.is_specified_in(code) {
        return Ok(None);
    }
    let Some(key) = schema::actual_key(code, level) else {
        return Ok(None);
    };
    let record = store.exact_lookup(level.table(), &key)?;
    Ok(record.map(|r| Designation {
        name: r.name,
        socr: r.socr,
    }))
}

fn house_groups<S: LevelStore + ?Sized>(store: &S, code: &str) -> Result<Option<Designation>> {
    let Some(prefix) = code.get(..Level::House.boundary()) else {
        return Ok(None);
    };
    let rows = store.prefix_range(Level::House.table(), prefix)?;
    if rows.is_empty() {
        return Ok(None);
    }
    let socr = rows
        .iter()
        .map(|r| r.socr.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_owned();
    let name = rows
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(",");
    Ok(Some(Designation { name, socr }))
}

fn wings<S: LevelStore + ?Sized>(store: &S, code: &str) -> Result<Option<Designation>> {
    let Some(house) = code.get(..Level::Wing.boundary()) else {
        return Ok(None);
    };
    let rows = store.prefix_range(Level::Wing.table(), house)?;
    let name = rows
        .iter()
        .map(|r| r.korp.as_str())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    Ok((!name.is_empty()).then(|| Designation {
        name,
        socr: String::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KladrDb;
    use crate::raw::{RecordRaw, TablesRaw};

    fn db() -> KladrDb {
        KladrDb::from_raw(TablesRaw {
            region: vec![RecordRaw::new("0200000000000", "Башкортостан", "Респ")],
            kladr: vec![
                RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
                RecordRaw::new("0200000500000", "Салават", "г"),
            ],
            street: vec![RecordRaw::new("02000005000004100", "Матросова", "ул")],
            doma: vec![
                RecordRaw::new("0200000500000410001", "Ч(24-36),Ч(40-50)", "").with_korp("1"),
                RecordRaw::new("0200000500000410003", "3,4,7", "ДОМ").with_korp("34"),
            ],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn full_code_names_every_populated_level() {
        let a = expand(&db(), "0200000500000410003").unwrap();
        assert_eq!(a.region.name, "Башкортостан");
        assert_eq!(a.region.socr, "Респ");
        // District segment is zero: the region row must not show up here.
        assert!(a.district.is_empty());
        assert_eq!(a.town.name, "Салават");
        assert!(a.point.is_empty());
        assert_eq!(a.street.name, "Матросова");
        assert_eq!(a.house.name, "Ч(24-36),Ч(40-50),3,4,7");
        assert_eq!(a.house.socr, "ДОМ");
        assert_eq!(a.wing.name, "34");
        assert_eq!(a.wing.socr, "");
    }

    #[test]
    fn short_code_leaves_deep_levels_empty() {
        let a = expand(&db(), "02000").unwrap();
        assert_eq!(a.region.name, "Башкортостан");
        assert_eq!(a.iter().count(), 7);
        assert!(a.iter().skip(1).all(|(_, d)| d.is_empty()));
    }

    #[test]
    fn wing_needs_the_full_code() {
        let a = expand(&db(), "02000005000004100").unwrap();
        assert!(!a.house.is_empty());
        assert!(a.wing.is_empty());
    }
}

// crates/kladr-core/src/model/convert.rs
use super::domain::{KladrDb, LevelRecord};
use crate::error::Result;
use crate::raw::{RecordRaw, TablesRaw};
use crate::schema::TableKind;
use tracing::info;

/// **Standard Converter:** Raw -> sorted tables.
///
/// Codes are trimmed; a code that is not exactly the table width rejects the
/// whole dataset.
pub fn from_raw(raw: TablesRaw) -> Result<KladrDb> {
    let mut db = KladrDb::default();
    let TablesRaw {
        region,
        kladr,
        street,
        doma,
    } = raw;

    for (kind, rows) in [
        (TableKind::Region, region),
        (TableKind::Kladr, kladr),
        (TableKind::Street, street),
        (TableKind::Doma, doma),
    ] {
        let table = db.table_mut(kind);
        for row in rows {
            table.insert(to_record(row))?;
        }
    }

    let stats = db.stats();
    info!(
        regions = stats.regions,
        localities = stats.localities,
        streets = stats.streets,
        houses = stats.houses,
        "classifier tables built"
    );
    Ok(db)
}

fn to_record(raw: RecordRaw) -> LevelRecord {
    LevelRecord {
        code: raw.code.trim().to_owned(),
        name: raw.name,
        socr: raw.socr,
        index: raw.index.map(|s| s.trim().to_owned()).unwrap_or_default(),
        korp: raw.korp.unwrap_or_default(),
    }
}

impl KladrDb {
    /// Builds the database from already parsed source tables.
    pub fn from_raw(raw: TablesRaw) -> Result<Self> {
        from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KladrError;

    #[test]
    fn trims_codes_and_indices() {
        let raw = TablesRaw {
            street: vec![RecordRaw::new(" 77000000000045900 ", "Электродная", "ул")
                .with_index(" 111141")],
            ..Default::default()
        };
        let db = from_raw(raw).unwrap();
        let rec = db.street.get("77000000000045900").unwrap();
        assert_eq!(rec.index, "111141");
        assert_eq!(rec.korp, "");
    }

    #[test]
    fn rejects_code_of_wrong_table_width() {
        let raw = TablesRaw {
            doma: vec![RecordRaw::new("77000000000045900", "1", "ДОМ")],
            ..Default::default()
        };
        assert!(matches!(from_raw(raw), Err(KladrError::InvalidData(_))));
    }
}

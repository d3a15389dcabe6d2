#![allow(dead_code)]

use kladr_core::raw::{RecordRaw, TablesRaw};
use kladr_core::KladrDb;

/// A slice of the classifier: Moscow, Bashkortostan and the Moscow oblast.
pub fn fixture() -> TablesRaw {
    TablesRaw {
        region: vec![
            RecordRaw::new("7700000000000", "Москва", "г"),
            RecordRaw::new("7700000000051", "Москва (архив)", "г"),
            RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
            RecordRaw::new("5000000000000", "Московская", "обл"),
        ],
        kladr: vec![
            RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
            RecordRaw::new("0200100000000", "Абзелиловский", "р-н").with_index("453620"),
            RecordRaw::new("0200100000100", "Аскарово", "с").with_index("453620"),
            RecordRaw::new("0200000500000", "Салават", "г").with_index("453250"),
            RecordRaw::new("7700000001000", "Измайловская Пасека", "п").with_index("111123"),
            RecordRaw::new("7700000002000", "Внуково", "п").with_index("119027"),
            RecordRaw::new("5000200000000", "Волоколамский", "р-н").with_index("143600"),
            RecordRaw::new("5000200100000", "Волоколамск", "г").with_index("143600"),
        ],
        street: vec![
            RecordRaw::new("02000005000004100", "Матросова", "ул").with_index("453259"),
            RecordRaw::new("77000000000021200", "Люблинская", "ул").with_index("109382"),
            RecordRaw::new("77000000000045900", "Электродная", "ул").with_index("111141"),
        ],
        doma: vec![
            RecordRaw::new("0200000500000410001", "Ч(24-36),Ч(40-50)", "ДОМ").with_index("453259"),
            RecordRaw::new("0200000500000410003", "3,4,7", "ДОМ")
                .with_index("453259")
                .with_korp("34"),
            RecordRaw::new("7700000000002120001", "1", "ДОМ").with_index("109382"),
            RecordRaw::new("7700000000002120002", "2к1", "ДОМ").with_index("109387"),
            RecordRaw::new("7700000001000000000", "7стр5", "ДОМ").with_index("111123"),
        ],
    }
}

pub fn db() -> KladrDb {
    KladrDb::from_raw(fixture()).expect("fixture must load")
}

/// `(field, value)` pairs of a resolution, owned for easy comparison.
pub fn fields(r: &kladr_core::Resolution) -> Vec<(String, String)> {
    r.fields()
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

pub fn field<'a>(r: &'a kladr_core::Resolution, name: &str) -> &'a str {
    r.fields()
        .into_iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("no field {name}"))
}

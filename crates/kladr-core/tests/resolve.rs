mod common;

use common::{db, field, fields};
use kladr_core::{resolve, Grain, KladrError, Level};

#[test]
fn region_only_code() {
    let r = resolve(&db(), "7700000001").unwrap();
    assert_eq!(field(&r, "region"), "Москва");
    assert_eq!(field(&r, "region_socr"), "г");
    assert_eq!(field(&r, "postalcode"), "");
    assert_eq!(field(&r, "postaltype"), "");
    assert_eq!(r.postal.grain, Grain::None);
    for (name, value) in fields(&r).into_iter().skip(4) {
        assert_eq!(value, "", "{name} should be empty");
    }
}

#[test]
fn point_code() {
    let r = resolve(&db(), "7700000001000").unwrap();
    assert_eq!(field(&r, "postaltype"), "point");
    assert_eq!(field(&r, "postalcode"), "111123");
    assert_eq!(field(&r, "point"), "Измайловская Пасека");
    assert_eq!(field(&r, "point_socr"), "п");
    assert_eq!(field(&r, "region"), "Москва");
    assert_eq!(field(&r, "street"), "");
}

#[test]
fn house_code() {
    let r = resolve(&db(), "7700000001000000000").unwrap();
    assert_eq!(field(&r, "postaltype"), "doma");
    assert_eq!(field(&r, "postalcode"), "111123");
    assert_eq!(field(&r, "doma"), "7стр5");
    assert_eq!(field(&r, "doma_socr"), "ДОМ");
    assert_eq!(field(&r, "point"), "Измайловская Пасека");
    assert_eq!(field(&r, "korp"), "");
}

#[test]
fn house_groups_and_wing() {
    let r = resolve(&db(), "0200000500000410003").unwrap();
    assert_eq!(field(&r, "postalcode"), "453259");
    assert_eq!(field(&r, "postaltype"), "doma");
    assert_eq!(field(&r, "region"), "Башкортостан");
    assert_eq!(field(&r, "region_socr"), "Респ");
    assert_eq!(field(&r, "district"), "");
    assert_eq!(field(&r, "town"), "Салават");
    assert_eq!(field(&r, "town_socr"), "г");
    assert_eq!(field(&r, "street"), "Матросова");
    assert_eq!(field(&r, "street_socr"), "ул");
    assert_eq!(field(&r, "doma"), "Ч(24-36),Ч(40-50),3,4,7");
    assert_eq!(field(&r, "korp"), "34");
    assert_eq!(field(&r, "korp_socr"), "");
}

#[test]
fn street_code_without_houses() {
    let r = resolve(&db(), "77000000000045900").unwrap();
    assert_eq!(r.postal.grain, Grain::Street);
    assert_eq!(r.postal.index, "111141");
    assert_eq!(r.address.street.name, "Электродная");
    assert!(r.address.house.is_empty());
}

#[test]
fn field_order_is_fixed() {
    let r = resolve(&db(), "77000").unwrap();
    let names: Vec<String> = fields(&r).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        names,
        vec![
            "postalcode", "postaltype", "region", "region_socr", "district", "district_socr",
            "town", "town_socr", "point", "point_socr", "street", "street_socr", "doma",
            "doma_socr", "korp", "korp_socr",
        ]
    );
    let levels: Vec<Level> = r.address.iter().map(|(l, _)| l).collect();
    assert_eq!(levels, Level::ALL.to_vec());
}

#[test]
fn length_boundary() {
    let db = db();
    assert!(matches!(
        resolve(&db, "7700"),
        Err(KladrError::InputTooShort { .. })
    ));
    assert!(resolve(&db, "77000").is_ok());
    assert!(matches!(resolve(&db, "77x00"), Err(KladrError::Usage(_))));
}

#[test]
fn house_records_always_resolve_at_house_grain() {
    let db = db();
    for rec in db.doma.iter() {
        let r = resolve(&db, &rec.code).unwrap();
        assert_eq!(r.postal.grain, Grain::House, "code {}", rec.code);
    }
}

#[test]
fn grain_never_decreases_when_code_grows() {
    let db = db();
    for chain in [
        &["77000", "7700000001", "7700000001000", "7700000001000000000"][..],
        &["50002", "50002001", "50002001000"][..],
        &["02000", "02000005", "020000050000041", "0200000500000410003"][..],
    ] {
        let grains: Vec<Grain> = chain
            .iter()
            .map(|c| resolve(&db, c).unwrap().postal.grain)
            .collect();
        assert!(
            grains.windows(2).all(|w| w[0] <= w[1]),
            "{chain:?} -> {grains:?}"
        );
    }
}

#[test]
fn district_and_town_grains() {
    let db = db();
    let r = resolve(&db, "50002").unwrap();
    assert_eq!((r.postal.grain, r.postal.index.as_str()), (Grain::District, "143600"));
    assert_eq!(r.address.district.name, "Волоколамский");

    let r = resolve(&db, "50002001").unwrap();
    assert_eq!(r.postal.grain, Grain::Town);
    assert_eq!(r.address.town.name, "Волоколамск");
    assert_eq!(r.address.district.name, "Волоколамский");
}

#[test]
fn repeated_calls_agree() {
    let db = db();
    for code in ["7700000001", "0200000500000410003", "50002001"] {
        assert_eq!(resolve(&db, code).unwrap(), resolve(&db, code).unwrap());
    }
}

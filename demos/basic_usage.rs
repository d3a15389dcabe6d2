//! Basic usage example for kladr-rs
//!
//! This example demonstrates how to:
//! - Build an in-memory classifier from raw tables
//! - Resolve a code into its postal index and level names
//! - List the children of a code and filter them by name
//! - Browse postal indices under a street

use kladr_core::raw::{RecordRaw, TablesRaw};
use kladr_core::{resolve, search, KladrDb, Result};

fn sample() -> TablesRaw {
    TablesRaw {
        region: vec![
            RecordRaw::new("7700000000000", "Москва", "г"),
            RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
        ],
        kladr: vec![
            RecordRaw::new("7700000001000", "Измайловская Пасека", "п").with_index("111123"),
            RecordRaw::new("0200100000000", "Абзелиловский", "р-н").with_index("453620"),
            RecordRaw::new("0200000500000", "Салават", "г").with_index("453250"),
        ],
        street: vec![
            RecordRaw::new("77000000000021200", "Люблинская", "ул").with_index("109382"),
            RecordRaw::new("02000005000004100", "Матросова", "ул"),
        ],
        doma: vec![
            RecordRaw::new("7700000000002120001", "1,3,5", "ДОМ").with_index("109382"),
            RecordRaw::new("7700000000002120002", "2,4", "ДОМ").with_index("109387"),
            RecordRaw::new("0200000500000410003", "3,4,7", "ДОМ")
                .with_index("453261")
                .with_korp("1"),
        ],
    }
}

fn main() -> Result<()> {
    println!("=== kladr-rs Basic Usage Example ===\n");

    let db = KladrDb::from_raw(sample())?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} regions, {} localities, {} streets, {} houses\n",
        stats.regions, stats.localities, stats.streets, stats.houses
    );

    // Example 1: Full resolution of a house code
    println!("--- Example 1: Resolve a house code ---");
    let r = resolve(&db, "0200000500000410003")?;
    for (name, value) in r.fields() {
        println!("{name}\t{value}");
    }
    println!();

    // Example 2: A point without any street or house below it
    println!("--- Example 2: Resolve a point ---");
    let r = resolve(&db, "7700000001000")?;
    println!(
        "{} {} ({}: {})",
        r.address.point.name, r.address.point.socr, r.postal.grain, r.postal.index
    );
    println!();

    // Example 3: All regions
    println!("--- Example 3: List regions ---");
    for row in search(&db, "", "region", "")? {
        println!("{}\t{}", row.code, row.value);
    }
    println!();

    // Example 4: Districts of a region filtered by name
    println!("--- Example 4: Districts of Bashkortostan matching 'Абз' ---");
    for row in search(&db, "02", "district", "Абз")? {
        println!("{}\t{}", row.code, row.value);
    }
    println!();

    // Example 5: Postal indices of the houses on a street
    println!("--- Example 5: Postal indices under a street ---");
    for row in search(&db, "77000000000021200", "postalcode", "")? {
        println!("{}\t{}", row.code, row.value);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Error handling example for kladr-rs
//!
//! Shows how the three failure kinds surface to a caller: a malformed
//! request, a code that is too short, and a store that cannot be opened.

use kladr_core::raw::{RecordRaw, TablesRaw};
use kladr_core::{resolve, search, ErrorKind, KladrDb, KladrError, StoreConfig};

fn report(label: &str, err: &KladrError) {
    let kind = match err.kind() {
        ErrorKind::Usage => "usage",
        ErrorKind::InputTooShort => "input too short",
        ErrorKind::Store => "store",
    };
    println!("{label}: [{kind}] {err}");
}

fn main() {
    println!("=== kladr-rs Error Handling Example ===\n");

    let db = match KladrDb::from_raw(TablesRaw {
        region: vec![RecordRaw::new("7700000000000", "Москва", "г")],
        ..Default::default()
    }) {
        Ok(db) => db,
        Err(e) => {
            report("building sample", &e);
            return;
        }
    };

    // Example 1: Code shorter than five digits
    println!("--- Example 1: Short code ---");
    if let Err(e) = resolve(&db, "7700") {
        report("resolve 7700", &e);
    }
    println!();

    // Example 2: Unsupported search level
    println!("--- Example 2: Unknown level ---");
    if let Err(e) = search(&db, "77", "house", "") {
        report("search house", &e);
    }
    println!();

    // Example 3: Non-digit code
    println!("--- Example 3: Malformed code ---");
    if let Err(e) = resolve(&db, "77-00-000") {
        report("resolve 77-00-000", &e);
    }
    println!();

    // Example 4: A code with no records is not an error
    println!("--- Example 4: Unknown but well-formed code ---");
    match resolve(&db, "9900000000000") {
        Ok(r) => println!(
            "resolved with postaltype {:?} and region {:?}",
            r.postal.grain.as_str(),
            r.address.region.name
        ),
        Err(e) => report("resolve 9900000000000", &e),
    }
    println!();

    // Example 5: Missing dataset file
    println!("--- Example 5: Missing store ---");
    let missing = StoreConfig::new("/nonexistent/kladr.bin");
    if let Err(e) = resolve(&missing, "7700000000000") {
        report("open /nonexistent/kladr.bin", &e);
    }

    println!("\n=== Example completed ===");
}

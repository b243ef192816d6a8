//! Error handling example for geoselect-rs
//!
//! This example demonstrates the load errors and the lookups that simply
//! come back empty.

use geoselect_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoselect-rs Error Handling Example ===\n");

    // Example 1: Invalid datasets are load errors
    println!("--- Example 1: Rejected datasets ---");
    let duplicate = r#"[
        {"name": "Georgia", "abbreviation": "GE", "subdivisions": []},
        {"name": "Georgia", "abbreviation": "GE", "subdivisions": []}
    ]"#;
    match DefaultTable::from_json_str(duplicate) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    match DefaultTable::from_json_str("{not json") {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: File errors
    println!("--- Example 2: Loading from files ---");
    let dir = tempfile::tempdir()?;
    for name in ["missing.json", "table.csv"] {
        match DefaultTable::load_from_path(dir.path().join(name), None) {
            Ok(_) => println!("  unexpectedly loaded {name}"),
            Err(GeoSelectError::UnsupportedFormat(msg)) => println!("  ✗ unsupported: {msg}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Unknown names are not errors
    let table = DefaultTable::shared()?;
    println!("--- Example 3: Lookups that find nothing ---");
    for name in ["Atlantis", "", "united states"] {
        println!("  {name:?}: {} subdivisions", table.find_subdivisions(name).len());
    }
    for code in ["XX", "", "USA"] {
        match table.find_country_by_abbreviation(code) {
            Some(c) => println!("  {code:?}: {}", c.name()),
            None => println!("  {code:?}: not found"),
        }
    }
    println!();

    // Example 4: Forms missing a field are left alone
    println!("--- Example 4: Incomplete form ---");
    let controller = CascadeController::new(table, "country", "state");
    let mut form = MemoryForm::new().with_field("country", "Canada");
    let wired = controller.initialize(&mut form);
    println!("  wired: {wired}, country selector: {}", form.has_selector("country"));

    Ok(())
}

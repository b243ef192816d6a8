//! Basic usage example for geoselect-rs
//!
//! This example demonstrates how to:
//! - Load the embedded reference table
//! - Look up countries and their subdivisions
//! - Run the loose substring search

use geoselect_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoselect-rs Basic Usage Example ===\n");

    println!("Loading reference table...");
    let table = DefaultTable::shared()?;
    println!("✓ Table loaded\n");

    // Example 1: All countries, in table order
    println!("--- Example 1: List countries ---");
    let countries = table.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.abbreviation());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Abbreviation lookup
    println!("--- Example 2: Find country by abbreviation ---");
    if let Some(country) = table.find_country_by_abbreviation("ca") {
        println!("Found: {} ({})", country.name(), country.abbreviation());
        println!("Subdivisions: {}", country.subdivisions().len());
    }
    println!();

    // Example 3: What the subdivision selector would offer
    println!("--- Example 3: Subdivisions by exact country name ---");
    for name in ["Canada", "Japan", "canada"] {
        let subdivisions = table.find_subdivisions(name);
        if subdivisions.is_empty() {
            println!("{name:?}: none, the raw field stays free text");
        } else {
            let first: Vec<_> = subdivisions.iter().take(3).map(|s| s.name()).collect();
            println!("{name:?}: {} entries, starting {first:?}", subdivisions.len());
        }
    }
    println!();

    // Example 4: Loose search (not used by the cascade)
    println!("--- Example 4: Substring search ---");
    for (subdivision, country) in table.find_subdivisions_by_substring("new") {
        println!("  {} ({}), {}", subdivision.name(), subdivision.abbreviation(), country.name());
    }
    println!();

    let stats = table.stats();
    println!(
        "Stats: {} countries, {} subdivisions, {} countries with subdivisions",
        stats.countries, stats.subdivisions, stats.countries_with_subdivisions
    );

    Ok(())
}

//! geoselect: command-line interface for geoselect-core
//!
//! Inspects the reference table and replays the cascading country/subdivision
//! selectors against an in-memory form.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geoselect stats
//!
//! - List countries (optionally with a filter)
//!   $ geoselect countries
//!   $ geoselect --filter=US,CA countries
//!
//! - Show a country by abbreviation or name
//!   $ geoselect country ca
//!   $ geoselect country "United States"
//!
//! - List subdivisions / search
//!   $ geoselect subdivisions Canada
//!   $ geoselect search york
//!
//! - Snapshot the table
//!   $ geoselect export table.bin.gz
//!
//! - Replay a user session
//!   $ geoselect -v simulate --initial-country "United States" \
//!       --initial-subdivision Texas --country Canada --subdivision Yukon
mod args;

use crate::args::{CliArgs, Commands, ExportFormat};
use anyhow::{bail, Context};
use clap::Parser;
use geoselect_core::loader::common_io::detect_format;
use geoselect_core::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const COUNTRY_FIELD: &str = "country";
const SUBDIVISION_FIELD: &str = "subdivision";

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Parse filter if provided
    let filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });
    let filter_slice = filter.as_deref();

    let table = match &args.input {
        Some(path) => DefaultTable::load_from_path(path, filter_slice)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let shared = DefaultTable::shared()?;
            match filter_slice {
                Some(f) if !f.is_empty() => shared.filtered(f),
                _ => shared.clone(),
            }
        }
    };
    if filter_slice.is_some_and(|f| !f.is_empty()) && table.is_empty() {
        tracing::warn!(filter = ?filter_slice, "filter matched no country");
    }

    match args.command {
        Commands::Stats => {
            let stats = table.stats();
            println!("Table statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Subdivisions: {}", stats.subdivisions);
            println!(
                "  Countries with subdivisions: {}",
                stats.countries_with_subdivisions
            );
        }

        Commands::Countries => {
            for c in table.countries() {
                println!("{} ({})", c.name(), c.abbreviation());
            }
        }

        Commands::Country { code } => {
            let found = table
                .find_country_by_abbreviation(&code)
                .or_else(|| table.find_country(&code));
            match found {
                Some(c) => {
                    println!("Country: {}", c.name());
                    println!("Abbreviation: {}", c.abbreviation());
                    println!("Subdivisions: {}", c.subdivisions().len());
                }
                None => eprintln!("No country found for: {code}"),
            }
        }

        Commands::Subdivisions { country } => match table.find_country(&country) {
            Some(c) if c.has_subdivisions() => {
                println!("Subdivisions of {}:", c.name());
                for s in c.subdivisions() {
                    println!("- {} ({})", s.name(), s.abbreviation());
                }
            }
            Some(c) => println!("{} has no subdivisions; the raw field stays free text", c.name()),
            None => eprintln!("Country {country} not found"),
        },

        Commands::Search { query } => {
            let countries = table.find_countries_by_substring(&query);
            let subdivisions = table.find_subdivisions_by_substring(&query);
            if countries.is_empty() && subdivisions.is_empty() {
                println!("Nothing found matching: {query}");
            }
            for c in countries {
                println!("{} ({})", c.name(), c.abbreviation());
            }
            for (s, c) in subdivisions {
                println!("{} ({}), {}", s.name(), s.abbreviation(), c.name());
            }
        }

        Commands::Export { out, format } => {
            let out = export_path(out, format)?;
            table
                .save_as(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} countries to {}", table.country_count(), out.display());
        }

        Commands::Simulate {
            country,
            subdivision,
            initial_country,
            initial_subdivision,
        } => simulate(
            &table,
            &initial_country,
            &initial_subdivision,
            &country,
            subdivision.as_deref(),
        )?,
    }

    Ok(())
}

/// Resolves the export target: an explicit `--format` must agree with a
/// recognised extension, and is appended when there is none.
fn export_path(out: PathBuf, format: Option<ExportFormat>) -> anyhow::Result<PathBuf> {
    match (detect_format(&out), format) {
        (Ok((detected, _)), Some(f)) if !f.matches(detected) => bail!(
            "{} does not end in .{} but --format {} was given",
            out.display(),
            f.extension(),
            f.extension()
        ),
        (Ok(_), _) => Ok(out),
        (Err(_), Some(f)) => {
            let mut name = out.into_os_string();
            name.push(".");
            name.push(f.extension());
            Ok(PathBuf::from(name))
        }
        (Err(e), None) => bail!("{e}; pass --format to pick one"),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn simulate(
    table: &DefaultTable,
    initial_country: &str,
    initial_subdivision: &str,
    country: &str,
    subdivision: Option<&str>,
) -> anyhow::Result<()> {
    let controller = CascadeController::new(table, COUNTRY_FIELD, SUBDIVISION_FIELD);
    let mut form = MemoryForm::new()
        .with_field(COUNTRY_FIELD, initial_country)
        .with_field(SUBDIVISION_FIELD, initial_subdivision)
        .with_required(SUBDIVISION_FIELD, RequiredLevel::Required);

    controller.initialize(&mut form);
    print_form("initialized", &form);

    if controller.pick_country(&mut form, country).is_none() {
        bail!("{country:?} is not a country option");
    }
    print_form(&format!("country -> {country}"), &form);

    if let Some(s) = subdivision {
        if controller.pick_subdivision(&mut form, s).is_none() {
            bail!("{s:?} is not a subdivision option for {country}");
        }
        print_form(&format!("subdivision -> {s}"), &form);
    }

    println!("{}", serde_json::to_string_pretty(&form.events())?);
    Ok(())
}

fn print_form(step: &str, form: &MemoryForm) {
    println!("[{step}]");
    for field in [COUNTRY_FIELD, SUBDIVISION_FIELD] {
        let value = form.value(field).unwrap_or_default();
        match form.selector(field) {
            Some(s) => println!(
                "  {field} = {value:?} (selector {}, {} options, req {})",
                s.id(),
                s.entry_count(),
                s.required_level().code()
            ),
            None => println!("  {field} = {value:?} (free text)"),
        }
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use geoselect_core::loader::common_io::DatasetFormat;
use std::path::PathBuf;

/// CLI arguments for geoselect
#[derive(Debug, Parser)]
#[command(
    name = "geoselect",
    version,
    about = "Inspect the country/subdivision table and simulate the cascading selectors"
)]
pub struct CliArgs {
    /// Dataset file (.json, .json.gz, .bin, .bin.gz); the embedded table when omitted
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Optional comma-separated list of country abbreviations to keep (e.g. US,CA)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Log controller transitions (same as RUST_LOG=debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table contents
    Stats,

    /// List all countries in table order
    Countries,

    /// Lookup a country by abbreviation or exact name
    Country {
        /// Abbreviation (e.g. CA) or name (e.g. Canada)
        code: String,
    },

    /// List the subdivisions of a country (exact name)
    Subdivisions {
        /// Country name, e.g. "United States"
        country: String,
    },

    /// Search countries and subdivisions containing a substring
    Search {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// Write the table to a file
    Export {
        /// Output path; the encoding follows the extension
        out: PathBuf,

        /// Encoding; appended when `out` has no recognised extension, and
        /// must agree with it otherwise
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Run the cascade controller against an in-memory form
    Simulate {
        /// Country to pick after initialization
        #[arg(long)]
        country: String,

        /// Subdivision to pick after the country
        #[arg(long)]
        subdivision: Option<String>,

        /// Country value the form starts with
        #[arg(long, default_value = "")]
        initial_country: String,

        /// Subdivision value the form starts with
        #[arg(long, default_value = "")]
        initial_subdivision: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Bin,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Bin => "bin",
        }
    }

    pub fn matches(self, format: DatasetFormat) -> bool {
        matches!(
            (self, format),
            (ExportFormat::Json, DatasetFormat::Json) | (ExportFormat::Bin, DatasetFormat::Binary)
        )
    }
}

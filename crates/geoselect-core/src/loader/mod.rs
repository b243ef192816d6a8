// crates/geoselect-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded bytes, files, decompression) and
//! delegates to the JSON converter or the binary snapshot decoder.

use crate::common::DefaultBackend;
use crate::error::Result;
use crate::model::{convert, RegionTable};
use crate::raw::CountriesRaw;
use crate::traits::GeoBackend;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;

pub mod builder;
pub mod common_io;

use common_io::DatasetFormat;

/// The reference dataset compiled into the crate.
pub static EMBEDDED_DATASET: &str = include_str!("../../data/countries.json");

// Single in-process cache so the embedded JSON is parsed once per process.
static TABLE_CACHE: OnceCell<RegionTable<DefaultBackend>> = OnceCell::new();

impl RegionTable<DefaultBackend> {
    /// Load the embedded reference table.
    ///
    /// The first call parses the embedded JSON; later calls clone the cached
    /// table. Use [`RegionTable::shared`] to borrow it without cloning.
    pub fn load() -> Result<Self> {
        Self::shared().cloned()
    }

    /// Borrow the process-wide embedded table.
    pub fn shared() -> Result<&'static Self> {
        TABLE_CACHE.get_or_try_init(|| {
            let table = Self::embedded()?;
            tracing::info!(countries = table.country_count(), "embedded reference table loaded");
            Ok(table)
        })
    }
}

impl<B: GeoBackend> RegionTable<B> {
    /// Parse the embedded dataset into a fresh table (no caching).
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        convert::from_raw(raw)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }

    /// **Standard Loader:** reads a dataset file.
    ///
    /// The encoding is picked from the file name: `*.json`, `*.json.gz`,
    /// `*.bin`, `*.bin.gz` (gzip needs the `compact` feature). When `filter`
    /// is non-empty only the countries with those abbreviations are kept.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let (format, gzip) = common_io::detect_format(path)?;
        let mut reader = common_io::open_stream(path, gzip)?;

        let table = match format {
            DatasetFormat::Json => {
                let table = Self::from_json_reader(reader)?;
                match filter {
                    Some(f) if !f.is_empty() => table.filtered(f),
                    _ => table,
                }
            }
            DatasetFormat::Binary => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                Self::from_bytes(&data, filter)?
            }
        };

        tracing::debug!(
            path = %path.display(),
            ?format,
            countries = table.country_count(),
            "reference table loaded from file"
        );
        Ok(table)
    }
}

// crates/geoselect-core/src/loader/common_io.rs
use crate::error::{GeoSelectError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// On-disk encodings understood by the loader, picked from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    /// Bincode snapshot written by `RegionTable::save_as`.
    Binary,
}

/// Format and compression, derived from `*.json`, `*.json.gz`, `*.bin`,
/// `*.bin.gz`.
pub fn detect_format(path: &Path) -> Result<(DatasetFormat, bool)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let (stem, gzip) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };

    let format = if stem.ends_with(".json") {
        DatasetFormat::Json
    } else if stem.ends_with(".bin") {
        DatasetFormat::Binary
    } else {
        return Err(GeoSelectError::UnsupportedFormat(format!(
            "{} (expected .json, .json.gz, .bin or .bin.gz)",
            path.display()
        )));
    };
    Ok((format, gzip))
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when asked.
/// Returns a generic reader so the caller doesn't care about compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoSelectError::NotFound(format!("{}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(flate2::read::GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoSelectError::UnsupportedFormat(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_from_suffix() {
        assert_eq!(
            detect_format(Path::new("data/countries.json")).unwrap(),
            (DatasetFormat::Json, false)
        );
        assert_eq!(
            detect_format(Path::new("COUNTRIES.JSON.GZ")).unwrap(),
            (DatasetFormat::Json, true)
        );
        assert_eq!(
            detect_format(Path::new("/tmp/table.bin.gz")).unwrap(),
            (DatasetFormat::Binary, true)
        );
        assert!(detect_format(Path::new("table.csv")).is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json"), false).err().unwrap();
        assert!(matches!(err, GeoSelectError::NotFound(_)));
    }
}

// crates/geoselect-core/src/loader/builder.rs
use super::common_io::{detect_format, DatasetFormat};
use crate::error::Result;
use crate::model::RegionTable;
use crate::traits::GeoBackend;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl<B: GeoBackend> RegionTable<B> {
    /// Writes the table to `path`, choosing the encoding from the file name
    /// the same way [`RegionTable::load_from_path`] reads it back.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (format, gzip) = detect_format(path)?;
        let compression = if gzip {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        };

        let file = File::create(path)?;
        let writer = encode_into(self, BufWriter::new(file), format, compression)?;
        // into_inner flushes; a failure here is a truncated file
        writer.into_inner().map_err(|e| e.into_error())?;

        tracing::debug!(path = %path.display(), ?format, ?compression, "table written");
        Ok(())
    }

    /// Renders the table in the dataset JSON shape.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Encodes `table` into `writer` and finishes the stream (gzip trailer
/// included), handing the inner writer back.
fn encode_into<B: GeoBackend, W: Write>(
    table: &RegionTable<B>,
    writer: W,
    format: DatasetFormat,
    compression: CompressionMode,
) -> Result<W> {
    match compression {
        CompressionMode::None => {
            let mut writer = writer;
            write_payload(table, &mut writer, format)?;
            writer.flush()?;
            Ok(writer)
        }
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                write_payload(table, &mut encoder, format)?;
                let mut writer = encoder.finish()?;
                writer.flush()?;
                Ok(writer)
            }
            #[cfg(not(feature = "compact"))]
            {
                drop(writer);
                Err(crate::error::GeoSelectError::UnsupportedFormat(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
    }
}

fn write_payload<B: GeoBackend, W: Write>(
    table: &RegionTable<B>,
    writer: &mut W,
    format: DatasetFormat,
) -> Result<()> {
    match format {
        DatasetFormat::Binary => bincode::DefaultOptions::new().serialize_into(writer, table)?,
        DatasetFormat::Json => serde_json::to_writer_pretty(writer, table)?,
    }
    Ok(())
}

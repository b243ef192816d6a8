// crates/geoselect-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, validating or persisting a [`RegionTable`].
///
/// Lookups and cascade transitions never fail: an unknown country is simply
/// "no subdivisions" and a missing field turns a transition into a no-op.
/// Only the dataset plumbing reports errors.
///
/// [`RegionTable`]: crate::RegionTable
#[derive(Debug, Error)]
pub enum GeoSelectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("duplicate country name: {0:?}")]
    DuplicateCountry(String),

    #[error("duplicate subdivision {subdivision:?} in country {country:?}")]
    DuplicateSubdivision {
        country: String,
        subdivision: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoSelectError>;

// crates/geoselect-core/src/common.rs
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`RegionTable`].
///
/// Returned by [`RegionSearch::stats`], these counts reflect the table as it
/// was materialized, after any country filter applied at load time.
///
/// [`RegionTable`]: crate::RegionTable
/// [`RegionSearch::stats`]: crate::search::RegionSearch::stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub countries: usize,
    pub subdivisions: usize,
    /// Countries that carry at least one subdivision (and therefore get a
    /// subdivision selector).
    pub countries_with_subdivisions: usize,
}

/// Default backend: plain owned `String`s.
///
/// Used by the aliases [`StandardBackend`] and [`DefaultTable`](crate::DefaultTable).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// Compact backend: `Box<str>` drops the spare capacity a `String` carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactBackend;

impl GeoBackend for CompactBackend {
    type Str = Box<str>;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.into()
    }
}

/// Convenient alias used in demos and the CLI.
pub type StandardBackend = DefaultBackend;

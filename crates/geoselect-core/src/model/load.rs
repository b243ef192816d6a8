// crates/geoselect-core/src/model/load.rs
use super::RegionTable;
use crate::error::Result;
use crate::traits::GeoBackend;
use bincode::Options;

impl<B: GeoBackend> RegionTable<B> {
    /// Reconstructs a table from a bincode snapshot, optionally keeping only
    /// the countries whose abbreviation is listed in `filter`.
    ///
    /// The snapshot is validated again after decoding: a snapshot is just
    /// bytes on disk and may not have been written by [`RegionTable::save_as`].
    pub fn from_bytes(data: &[u8], filter: Option<&[&str]>) -> Result<Self> {
        // The embedded table is a few KB; 16MB is far beyond any real dataset.
        let table: RegionTable<B> = bincode::DefaultOptions::new()
            .with_limit(16 * 1024 * 1024)
            .allow_trailing_bytes()
            .deserialize(data)?;
        table.validate()?;

        Ok(match filter {
            Some(f) if !f.is_empty() => table.filtered(f),
            _ => table,
        })
    }

    /// Serializes the table into the bincode snapshot format read by
    /// [`RegionTable::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new().serialize(self)?)
    }

    /// Returns a copy holding only the countries whose abbreviation appears
    /// in `abbreviations` (ASCII case-insensitive), in table order.
    pub fn filtered(&self, abbreviations: &[&str]) -> Self {
        let countries = self
            .countries
            .iter()
            .filter(|c| {
                abbreviations
                    .iter()
                    .any(|a| a.trim().eq_ignore_ascii_case(c.abbreviation()))
            })
            .cloned()
            .collect();

        // A subset of a valid table is still valid.
        RegionTable { countries }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::DefaultBackend;
    use crate::model::{Country, RegionTable, Subdivision};

    fn sample() -> RegionTable<DefaultBackend> {
        RegionTable::from_entries(vec![
            Country::new("Canada", "CA", vec![Subdivision::new("Yukon", "YT")]),
            Country::new("Japan", "JP", vec![]),
            Country::new("Mexico", "MX", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn snapshot_restores_the_same_table() {
        let table = sample();
        let bytes = table.to_bytes().unwrap();
        let restored = RegionTable::<DefaultBackend>::from_bytes(&bytes, None).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn filter_keeps_table_order_and_ignores_case() {
        let bytes = sample().to_bytes().unwrap();
        let restored =
            RegionTable::<DefaultBackend>::from_bytes(&bytes, Some(&["mx", "CA"][..])).unwrap();
        let names: Vec<_> = restored.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Canada", "Mexico"]);
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(RegionTable::<DefaultBackend>::from_bytes(&[0xff; 3], None).is_err());
    }
}

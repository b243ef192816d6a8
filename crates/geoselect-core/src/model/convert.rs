// crates/geoselect-core/src/model/convert.rs
use super::{Country, RegionTable, Subdivision};
use crate::error::{GeoSelectError, Result};
use crate::raw::CountriesRaw;
use crate::traits::GeoBackend;
use std::collections::HashSet;

/// **Standard Converter:** Raw JSON rows -> validated [`RegionTable`].
///
/// Names are kept verbatim (they are lookup keys); abbreviations are
/// whitespace-trimmed because some exports carry stray padding (`" GG"`).
pub fn from_raw<B: GeoBackend>(raw_countries: CountriesRaw) -> Result<RegionTable<B>> {
    let countries = raw_countries
        .into_iter()
        .map(|c_raw| {
            let subdivisions = c_raw
                .subdivisions
                .into_iter()
                .map(|s_raw| Subdivision::<B>::new(&s_raw.name, s_raw.abbreviation.trim()))
                .collect();

            Country::<B>::new(&c_raw.name, c_raw.abbreviation.trim(), subdivisions)
        })
        .collect();

    RegionTable::from_entries(countries)
}

impl<B: GeoBackend> RegionTable<B> {
    /// Checks the table invariants: non-empty names, unique country names,
    /// unique subdivision names per country.
    pub(crate) fn validate(&self) -> Result<()> {
        let mut seen_countries = HashSet::with_capacity(self.countries.len());

        for country in &self.countries {
            if country.name().is_empty() {
                return Err(GeoSelectError::InvalidData(format!(
                    "country with abbreviation {:?} has an empty name",
                    country.abbreviation()
                )));
            }
            if !seen_countries.insert(country.name()) {
                return Err(GeoSelectError::DuplicateCountry(country.name().to_string()));
            }

            let mut seen_subdivisions = HashSet::with_capacity(country.subdivisions.len());
            for subdivision in &country.subdivisions {
                if subdivision.name().is_empty() {
                    return Err(GeoSelectError::InvalidData(format!(
                        "{} has a subdivision with an empty name",
                        country.name()
                    )));
                }
                if !seen_subdivisions.insert(subdivision.name()) {
                    return Err(GeoSelectError::DuplicateSubdivision {
                        country: country.name().to_string(),
                        subdivision: subdivision.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

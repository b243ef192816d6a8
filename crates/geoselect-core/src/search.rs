// crates/geoselect-core/src/search.rs
use crate::common::TableStats;
use crate::model::{Country, RegionTable, Subdivision};
use crate::text::fold_key;
use crate::traits::{GeoBackend, NameMatch};

/// The lookup operations available on a reference table.
///
/// The cascade only needs [`RegionSearch::find_subdivisions`]; the rest
/// serve the CLI, the bindings and general callers.
pub trait RegionSearch<B: GeoBackend> {
    fn stats(&self) -> TableStats;

    /// All countries, in table order.
    fn countries(&self) -> &[Country<B>];

    /// Exact, case-sensitive country lookup by display name.
    fn find_country(&self, name: &str) -> Option<&Country<B>>;

    /// Returns the subdivisions of the country named exactly `country_name`,
    /// in table order.
    ///
    /// An unknown country and a country without subdivisions both yield an
    /// empty slice; neither is an error.
    ///
    /// # Example
    ///
    /// ```
    /// use geoselect_core::prelude::*;
    ///
    /// let table = DefaultTable::load().unwrap();
    ///
    /// let provinces = table.find_subdivisions("Canada");
    /// assert_eq!(provinces.len(), 13);
    /// assert_eq!(provinces[0].abbreviation(), "AB");
    ///
    /// assert!(table.find_subdivisions("Japan").is_empty());
    /// assert!(table.find_subdivisions("Atlantis").is_empty());
    /// ```
    fn find_subdivisions(&self, country_name: &str) -> &[Subdivision<B>];

    /// Exact lookup of one subdivision inside one country.
    fn find_subdivision(&self, country_name: &str, name: &str) -> Option<&Subdivision<B>>;

    /// Country lookup by abbreviation (trimmed, ASCII case-insensitive).
    fn find_country_by_abbreviation(&self, code: &str) -> Option<&Country<B>>;

    /// Countries whose name loosely contains `substr` (see [`fold_key`]).
    fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country<B>>;

    /// Subdivisions whose name loosely contains `substr`, with their country.
    fn find_subdivisions_by_substring(&self, substr: &str) -> Vec<(&Subdivision<B>, &Country<B>)>;
}

impl<B: GeoBackend> RegionSearch<B> for RegionTable<B> {
    fn stats(&self) -> TableStats {
        let countries = self.as_slice();
        TableStats {
            countries: countries.len(),
            subdivisions: countries.iter().map(|c| c.subdivisions.len()).sum(),
            countries_with_subdivisions: countries.iter().filter(|c| c.has_subdivisions()).count(),
        }
    }

    fn countries(&self) -> &[Country<B>] {
        self.as_slice()
    }

    fn find_country(&self, name: &str) -> Option<&Country<B>> {
        // Linear scan; the table has a few hundred rows at most.
        self.as_slice().iter().find(|c| c.is_named(name))
    }

    fn find_subdivisions(&self, country_name: &str) -> &[Subdivision<B>] {
        self.find_country(country_name)
            .map(|c| c.subdivisions())
            .unwrap_or(&[])
    }

    fn find_subdivision(&self, country_name: &str, name: &str) -> Option<&Subdivision<B>> {
        self.find_country(country_name)
            .and_then(|c| c.subdivision(name))
    }

    fn find_country_by_abbreviation(&self, code: &str) -> Option<&Country<B>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.as_slice()
            .iter()
            .find(|c| c.abbreviation().eq_ignore_ascii_case(code))
    }

    fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country<B>> {
        let q = substr.trim();
        if fold_key(q).is_empty() {
            return Vec::new();
        }
        self.as_slice().iter().filter(|c| c.name_contains(q)).collect()
    }

    fn find_subdivisions_by_substring(&self, substr: &str) -> Vec<(&Subdivision<B>, &Country<B>)> {
        let q = substr.trim();
        let mut out = Vec::new();
        if fold_key(q).is_empty() {
            return out;
        }

        for country in self.as_slice() {
            for subdivision in &country.subdivisions {
                if subdivision.name_contains(q) {
                    out.push((subdivision, country));
                }
            }
        }
        out
    }
}

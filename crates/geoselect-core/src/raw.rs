// crates/geoselect-core/src/raw.rs
use serde::Deserialize;

/// Raw subdivision structure as it comes from a JSON dataset.
///
/// Older exports of the table used `abbr`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct SubdivisionRaw {
    pub name: String,
    #[serde(alias = "abbr", default)]
    pub abbreviation: String,
}

/// Raw country structure as it comes from a JSON dataset.
///
/// Older exports used `abbr` and `states`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    #[serde(alias = "abbr", default)]
    pub abbreviation: String,
    #[serde(alias = "states", default)]
    pub subdivisions: Vec<SubdivisionRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;

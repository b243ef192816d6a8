// crates/geoselect-core/src/model/mod.rs
//! # Reference table model
//!
//! A flat, ordered `Vec<Country>`, each country owning its ordered
//! `Vec<Subdivision>`. The table is small (a few hundred rows), so every
//! lookup is a linear scan in table order.
//!
//! **Structure:** `RegionTable` -> `Vec<Country>` -> `Vec<Subdivision>`
pub mod convert;
pub mod load;

use crate::common::DefaultBackend;
use crate::error::Result;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// A state, province or territory belonging to a [`Country`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Subdivision<B: GeoBackend> {
    pub name: B::Str,
    pub abbreviation: B::Str, // e.g. "TX" or "QC"
}

/// A country entry of the reference table.
///
/// An empty `subdivisions` list means the country gets no subdivision
/// selector; the raw field stays the only input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Country<B: GeoBackend> {
    pub name: B::Str,
    pub abbreviation: B::Str, // e.g. "US"
    pub subdivisions: Vec<Subdivision<B>>,
}

/// The immutable reference table.
///
/// Built once (see [`RegionTable::load`] and [`RegionTable::from_entries`])
/// and only ever read afterwards; there is no API to mutate a table in
/// place. Country names are unique across the table, subdivision names are
/// unique within their country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct RegionTable<B: GeoBackend> {
    countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultTable = RegionTable<DefaultBackend>;

impl<B: GeoBackend> RegionTable<B> {
    /// Builds a table from already-typed entries, checking the uniqueness
    /// invariants.
    pub fn from_entries(countries: Vec<Country<B>>) -> Result<Self> {
        let table = RegionTable { countries };
        table.validate()?;
        Ok(table)
    }

    /// Total number of countries in the table.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country<B>> {
        self.countries.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Country<B>] {
        &self.countries
    }
}

impl<'a, B: GeoBackend> IntoIterator for &'a RegionTable<B> {
    type Item = &'a Country<B>;
    type IntoIter = std::slice::Iter<'a, Country<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}

impl<B: GeoBackend> Country<B> {
    pub fn new(name: &str, abbreviation: &str, subdivisions: Vec<Subdivision<B>>) -> Self {
        Country {
            name: B::str_from(name),
            abbreviation: B::str_from(abbreviation),
            subdivisions,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn abbreviation(&self) -> &str {
        self.abbreviation.as_ref()
    }

    pub fn subdivisions(&self) -> &[Subdivision<B>] {
        &self.subdivisions
    }

    /// `true` when a subdivision selector should be shown for this country.
    pub fn has_subdivisions(&self) -> bool {
        !self.subdivisions.is_empty()
    }

    /// Exact-name subdivision lookup inside this country.
    pub fn subdivision(&self, name: &str) -> Option<&Subdivision<B>> {
        self.subdivisions.iter().find(|s| s.is_named(name))
    }
}

impl<B: GeoBackend> Subdivision<B> {
    pub fn new(name: &str, abbreviation: &str) -> Self {
        Subdivision {
            name: B::str_from(name),
            abbreviation: B::str_from(abbreviation),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn abbreviation(&self) -> &str {
        self.abbreviation.as_ref()
    }
}

impl<B: GeoBackend> NameMatch for Country<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: GeoBackend> NameMatch for Subdivision<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}

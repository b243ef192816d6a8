// crates/geoselect-core/src/cascade.rs

//! # Cascade controller
//!
//! Keeps a country selector and a dependent subdivision selector in step
//! with two bound form fields.
//!
//! ```
//! use geoselect_core::prelude::*;
//!
//! let table = DefaultTable::shared().unwrap();
//! let controller = CascadeController::new(table, "country", "state");
//! let mut form = MemoryForm::new()
//!     .with_field("country", "United States")
//!     .with_field("state", "Texas");
//!
//! assert!(controller.initialize(&mut form));
//! assert_eq!(form.selected_value("state").as_deref(), Some("Texas"));
//!
//! controller.pick_country(&mut form, "Canada");
//! controller.pick_subdivision(&mut form, "Yukon");
//! assert_eq!(form.value("country").as_deref(), Some("Canada"));
//! assert_eq!(form.value("state").as_deref(), Some("Yukon"));
//! ```

use crate::form::{FormHost, Selector};
use crate::model::RegionTable;
use crate::search::RegionSearch;
use crate::traits::GeoBackend;

/// Drives one (country, subdivision) field pair.
///
/// The controller holds no UI state of its own: bound values live in the
/// host's [`FieldBinding`](crate::form::FieldBinding), selectors on its
/// [`SelectorSurface`](crate::form::SelectorSurface). Every transition runs
/// to completion before returning.
#[derive(Debug, Clone)]
pub struct CascadeController<'t, B: GeoBackend> {
    table: &'t RegionTable<B>,
    country_field: String,
    subdivision_field: String,
}

impl<'t, B: GeoBackend> CascadeController<'t, B> {
    pub fn new(
        table: &'t RegionTable<B>,
        country_field: impl Into<String>,
        subdivision_field: impl Into<String>,
    ) -> Self {
        CascadeController {
            table,
            country_field: country_field.into(),
            subdivision_field: subdivision_field.into(),
        }
    }

    pub fn table(&self) -> &'t RegionTable<B> {
        self.table
    }

    pub fn country_field(&self) -> &str {
        &self.country_field
    }

    pub fn subdivision_field(&self) -> &str {
        &self.subdivision_field
    }

    /// Renders the country selector (every table country, current value
    /// pre-selected), hides the raw country input and sets up the
    /// subdivision side for the current country.
    ///
    /// Returns `false` without touching the host when either field is
    /// missing from the surface.
    pub fn initialize<H: FormHost + ?Sized>(&self, host: &mut H) -> bool {
        if !host.has_field(&self.country_field) || !host.has_field(&self.subdivision_field) {
            tracing::debug!(
                country_field = %self.country_field,
                subdivision_field = %self.subdivision_field,
                "field pair not on form; cascade not wired"
            );
            return false;
        }

        let current = host.value(&self.country_field).unwrap_or_default();
        host.set_field_visible(&self.country_field, false);

        let selector = Selector::build(
            &self.country_field,
            host.required_level(&self.country_field),
            self.table.countries().iter().map(|c| c.name()),
            &current,
        );
        attach(host, selector);

        self.setup_subdivisions(host, &current, false);
        tracing::debug!(country = %current, "cascade initialized");
        true
    }

    /// "Country changed": copies the country selector's value into the bound
    /// country field and rebuilds the subdivision side for it.
    ///
    /// Returns the newly selected country, or `None` when there is no
    /// country selector.
    pub fn country_changed<H: FormHost + ?Sized>(&self, host: &mut H) -> Option<String> {
        let selected = sync_field_from_selector(host, &self.country_field)?;
        self.setup_subdivisions(host, &selected, true);
        tracing::debug!(country = %selected, "country changed");
        Some(selected)
    }

    /// "Subdivision changed": copies the subdivision selector's value into
    /// the bound subdivision field.
    pub fn subdivision_changed<H: FormHost + ?Sized>(&self, host: &mut H) -> Option<String> {
        let selected = sync_field_from_selector(host, &self.subdivision_field)?;
        tracing::debug!(subdivision = %selected, "subdivision changed");
        Some(selected)
    }

    /// Dispatches a change event raised by the selector of `field`.
    pub fn handle_change<H: FormHost + ?Sized>(&self, host: &mut H, field: &str) -> Option<String> {
        if field == self.country_field {
            self.country_changed(host)
        } else if field == self.subdivision_field {
            self.subdivision_changed(host)
        } else {
            None
        }
    }

    /// Picks `country` in the country selector and runs the transition, as
    /// if a user had chosen it. `None` when it is not an option.
    pub fn pick_country<H: FormHost + ?Sized>(
        &self,
        host: &mut H,
        country: &str,
    ) -> Option<String> {
        if !host.choose_option(&self.country_field, country) {
            return None;
        }
        self.country_changed(host)
    }

    /// Picks `subdivision` in the subdivision selector and runs the
    /// transition. `None` when there is no selector or no such option.
    pub fn pick_subdivision<H: FormHost + ?Sized>(
        &self,
        host: &mut H,
        subdivision: &str,
    ) -> Option<String> {
        if !host.choose_option(&self.subdivision_field, subdivision) {
            return None;
        }
        self.subdivision_changed(host)
    }

    /// Shows a subdivision selector for `country`, or falls back to the raw
    /// input when the country has no subdivisions.
    ///
    /// `country_switch` is set when this runs because the country changed:
    /// a value picked from the selector that is being removed is stale and
    /// gets cleared.
    fn setup_subdivisions<H: FormHost + ?Sized>(
        &self,
        host: &mut H,
        country: &str,
        country_switch: bool,
    ) {
        let field = self.subdivision_field.as_str();
        let subdivisions = self.table.find_subdivisions(country);

        if subdivisions.is_empty() {
            let had_selector = host.has_selector(field);
            host.remove_selector(field);
            host.set_field_visible(field, true);
            if country_switch && had_selector {
                host.set_value(field, "");
            }
            return;
        }

        let current = host.value(field).unwrap_or_default();
        host.set_field_visible(field, false);

        let selector = Selector::build(
            field,
            host.required_level(field),
            subdivisions.iter().map(|s| s.name()),
            &current,
        );
        attach(host, selector);

        // The current value may not be among the new options; the bound
        // field must mirror what the selector shows.
        sync_field_from_selector(host, field);
    }
}

/// Inserts the selector, or replaces the existing one in place.
fn attach<H: FormHost + ?Sized>(host: &mut H, selector: Selector) {
    if host.has_selector(selector.field()) {
        host.replace_selector(selector);
    } else {
        host.insert_selector(selector);
    }
}

/// Writes the selector's current value to its bound field.
fn sync_field_from_selector<H: FormHost + ?Sized>(host: &mut H, field: &str) -> Option<String> {
    let value = host.selected_value(field)?;
    host.set_value(field, &value);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::form::{FieldBinding, MemoryForm, RequiredLevel, SelectorSurface};
    use crate::model::{Country, Subdivision};

    fn table() -> RegionTable<DefaultBackend> {
        RegionTable::from_entries(vec![
            Country::new(
                "United States",
                "US",
                vec![
                    Subdivision::new("Ohio", "OH"),
                    Subdivision::new("Texas", "TX"),
                ],
            ),
            Country::new(
                "Canada",
                "CA",
                vec![
                    Subdivision::new("Alberta", "AB"),
                    Subdivision::new("Yukon", "YT"),
                ],
            ),
            Country::new("Japan", "JP", vec![]),
            Country::new("Mexico", "MX", vec![]),
        ])
        .unwrap()
    }

    fn form(country: &str, state: &str) -> MemoryForm {
        MemoryForm::new()
            .with_field("country", country)
            .with_field("state", state)
    }

    #[test]
    fn missing_field_is_a_no_op() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = MemoryForm::new().with_field("state", "Ohio");

        assert!(!c.initialize(&mut f));
        assert!(!f.has_selector("state"));
        assert!(f.is_visible("state"));
        assert_eq!(c.country_changed(&mut f), None);
        assert_eq!(c.subdivision_changed(&mut f), None);
    }

    #[test]
    fn initialize_builds_both_selectors() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("United States", "Texas")
            .with_required("state", RequiredLevel::Recommended);

        assert!(c.initialize(&mut f));

        let country = f.selector("country").unwrap();
        assert_eq!(country.entry_count(), 4);
        assert_eq!(country.selected_value(), "United States");
        assert!(!f.is_visible("country"));

        let state = f.selector("state").unwrap();
        assert_eq!(state.entry_count(), 2);
        assert_eq!(state.selected_value(), "Texas");
        assert_eq!(state.required_level(), RequiredLevel::Recommended);
        assert!(!f.is_visible("state"));
        assert_eq!(f.value("state").as_deref(), Some("Texas"));
    }

    #[test]
    fn initialize_without_subdivisions_keeps_raw_value() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Japan", "Tokyo");

        assert!(c.initialize(&mut f));
        assert!(!f.has_selector("state"));
        assert!(f.is_visible("state"));
        assert_eq!(f.value("state").as_deref(), Some("Tokyo"));
    }

    #[test]
    fn unknown_country_leaves_country_selector_blank() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Atlantis", "");

        assert!(c.initialize(&mut f));
        assert_eq!(f.selected_value("country").as_deref(), Some(""));
        // Initialization reads the bound value but does not rewrite it.
        assert_eq!(f.value("country").as_deref(), Some("Atlantis"));
        assert!(!f.has_selector("state"));
    }

    #[test]
    fn switching_between_countries_with_subdivisions_replaces_in_place() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("United States", "Texas");
        c.initialize(&mut f);
        let before = f.events();

        assert_eq!(c.pick_country(&mut f, "Canada").as_deref(), Some("Canada"));

        let after = f.events();
        assert_eq!(after.replaced, before.replaced + 1);
        assert_eq!(after.inserted, before.inserted);
        assert_eq!(after.removed, 0);
        // Texas is not a Canadian option, so the bound value is reset.
        assert_eq!(f.value("state").as_deref(), Some(""));
        assert_eq!(f.selector("state").unwrap().options()[1].value, "Alberta");
    }

    #[test]
    fn switching_to_country_without_subdivisions_clears_value() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("United States", "Texas");
        c.initialize(&mut f);

        c.pick_country(&mut f, "Japan");

        assert_eq!(f.value("country").as_deref(), Some("Japan"));
        assert!(!f.has_selector("state"));
        assert!(f.is_visible("state"));
        assert_eq!(f.value("state").as_deref(), Some(""));
    }

    #[test]
    fn blank_country_writes_empty_value() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Canada", "Yukon");
        c.initialize(&mut f);

        assert_eq!(c.pick_country(&mut f, "").as_deref(), Some(""));
        assert_eq!(f.value("country").as_deref(), Some(""));
        assert!(!f.has_selector("state"));
    }

    #[test]
    fn handle_change_dispatches_by_field() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Canada", "");
        c.initialize(&mut f);

        assert!(f.choose_option("state", "Alberta"));
        assert_eq!(c.handle_change(&mut f, "state").as_deref(), Some("Alberta"));
        assert_eq!(f.value("state").as_deref(), Some("Alberta"));
        assert_eq!(c.handle_change(&mut f, "city"), None);
    }

    #[test]
    fn picking_an_unknown_option_changes_nothing() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Canada", "Yukon");
        c.initialize(&mut f);

        assert_eq!(c.pick_country(&mut f, "Atlantis"), None);
        assert_eq!(c.pick_subdivision(&mut f, "Texas"), None);
        assert_eq!(f.value("country").as_deref(), Some("Canada"));
        assert_eq!(f.value("state").as_deref(), Some("Yukon"));
    }

    #[test]
    fn blank_subdivision_writes_empty_value() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("Canada", "Yukon");
        c.initialize(&mut f);

        assert_eq!(c.pick_subdivision(&mut f, "").as_deref(), Some(""));
        assert_eq!(f.value("state").as_deref(), Some(""));
        assert!(f.has_selector("state"));
    }

    #[test]
    fn initialize_resets_value_missing_from_options() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("United States", "Foo");

        assert!(c.initialize(&mut f));
        assert_eq!(f.selected_value("state").as_deref(), Some(""));
        assert_eq!(f.value("state").as_deref(), Some(""));
    }

    #[test]
    fn free_text_survives_switch_between_countries_without_subdivisions() {
        let t = table();
        let c = CascadeController::new(&t, "country", "state");
        let mut f = form("United States", "Texas");
        c.initialize(&mut f);

        c.pick_country(&mut f, "Japan");
        assert!(f.is_visible("state"));
        f.set_value("state", "Osaka");

        c.pick_country(&mut f, "Mexico");
        assert!(!f.has_selector("state"));
        assert!(f.is_visible("state"));
        assert_eq!(f.value("state").as_deref(), Some("Osaka"));
    }
}

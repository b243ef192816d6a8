//! geoselect-wasm: WebAssembly bindings for geoselect-core
//!
//! Exposes the reference table to JavaScript and wires the cascading
//! country/subdivision selectors into a plain DOM page.
//!
//! What it provides
//! ----------------
//! - Initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Queries: `get_country_count()`, `get_country_names()`,
//!   `find_subdivisions(country)`, `get_subdivision_count(country)`
//! - `wire_up_country_and_state(form, countryField, stateField)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { wire_up_country_and_state } from 'geoselect-wasm';
//!
//! await init();
//! // `form.getAttribute(name)` returns an object with
//! // getValue() / setValue(v) / getRequiredLevel()
//! wire_up_country_and_state(form, 'address1_country', 'address1_stateorprovince');
//! ```
//!
//! Notes
//! -----
//! - The raw inputs are looked up by element id (the field name). Selectors
//!   go into the `<field>_d` container when present, otherwise next to the
//!   input in its parent.
//! - Generated selectors get the id `ddl_<field>` and a `req` attribute
//!   carrying the field's requirement level (0/1/2).

mod dom;

use geoselect_core::prelude::*;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

pub use dom::{FormAttribute, FormContext};

fn table() -> Option<&'static DefaultTable> {
    DefaultTable::shared().ok()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoselect WASM module...".into());

    match DefaultTable::shared() {
        Ok(table) => {
            let stats = table.stats();
            web_sys::console::log_1(
                &format!(
                    "Loaded {} countries, {} subdivisions",
                    stats.countries, stats.subdivisions
                )
                .into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("geoselect: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> usize {
    table().map_or(0, |t| t.country_count())
}

/// Country names in table order, as a JS array of strings.
#[wasm_bindgen]
pub fn get_country_names() -> JsValue {
    let array = js_sys::Array::new();
    for country in table().map(|t| t.countries()).unwrap_or(&[]) {
        array.push(&JsValue::from_str(country.name()));
    }
    array.into()
}

/// `[{name, abbreviation}]` for the country named exactly `country`; an
/// empty array for unknown countries and countries without subdivisions.
#[wasm_bindgen]
pub fn find_subdivisions(country: &str) -> JsValue {
    let subdivisions = table().map(|t| t.find_subdivisions(country)).unwrap_or(&[]);
    to_value(subdivisions).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_subdivision_count(country: &str) -> usize {
    table().map_or(0, |t| t.find_subdivisions(country).len())
}

/* --------------------------------------------------------------------------
   Form wiring
-------------------------------------------------------------------------- */

/// Renders the country and subdivision selectors for the given field pair
/// and keeps them in step with `form`.
///
/// Returns `false` (and leaves the page alone) when either raw input is not
/// on the page or there is no document.
#[wasm_bindgen]
pub fn wire_up_country_and_state(
    form: FormContext,
    country_field: &str,
    state_field: &str,
) -> bool {
    let Some(table) = table() else {
        return false;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };

    let controller = CascadeController::new(table, country_field, state_field);
    dom::wire(controller, document, form)
}

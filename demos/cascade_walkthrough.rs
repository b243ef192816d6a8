//! Cascade walkthrough for geoselect-rs
//!
//! Replays a user editing an address form: the country selector drives the
//! subdivision selector, which comes and goes with the chosen country.

use geoselect_rs::prelude::*;

const COUNTRY: &str = "address1_country";
const STATE: &str = "address1_stateorprovince";

fn show(step: &str, form: &MemoryForm) {
    println!("[{step}]");
    println!("  country = {:?}", form.value(COUNTRY).unwrap_or_default());
    match form.selector(STATE) {
        Some(s) => println!(
            "  state   = {:?} via {} ({} options)",
            form.value(STATE).unwrap_or_default(),
            s.id(),
            s.entry_count()
        ),
        None => println!(
            "  state   = {:?} (free text, visible: {})",
            form.value(STATE).unwrap_or_default(),
            form.is_visible(STATE)
        ),
    }
}

fn main() -> Result<()> {
    println!("=== geoselect-rs Cascade Walkthrough ===\n");

    let table = DefaultTable::shared()?;
    let controller = CascadeController::new(table, COUNTRY, STATE);

    let mut form = MemoryForm::new()
        .with_field(COUNTRY, "United States")
        .with_field(STATE, "Texas")
        .with_required(STATE, RequiredLevel::Required);

    controller.initialize(&mut form);
    show("form opened", &form);

    controller.pick_country(&mut form, "Japan");
    show("country -> Japan", &form);

    controller.pick_country(&mut form, "Canada");
    show("country -> Canada", &form);

    controller.pick_subdivision(&mut form, "Yukon");
    show("state -> Yukon", &form);

    let events = form.events();
    println!(
        "\nSelectors inserted {}, replaced {}, removed {}",
        events.inserted, events.replaced, events.removed
    );
    Ok(())
}

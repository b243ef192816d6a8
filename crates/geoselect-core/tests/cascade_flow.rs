use geoselect_core::prelude::*;

fn address_form(country: &str, state: &str) -> MemoryForm {
    MemoryForm::new()
        .with_field("address1_country", country)
        .with_field("address1_stateorprovince", state)
        .with_required("address1_stateorprovince", RequiredLevel::Required)
}

fn controller() -> CascadeController<'static, DefaultBackend> {
    CascadeController::new(
        DefaultTable::shared().unwrap(),
        "address1_country",
        "address1_stateorprovince",
    )
}

#[test]
fn canada_gets_province_selector() {
    let c = controller();
    let mut form = address_form("Canada", "");
    assert!(c.initialize(&mut form));

    let selector = form.selector("address1_stateorprovince").unwrap();
    assert_eq!(selector.id(), "ddl_address1_stateorprovince");
    assert_eq!(selector.entry_count(), 13);
    assert_eq!(selector.options()[0].value, "");
    assert_eq!(selector.required_level().code(), 2);
    assert_eq!(form.selector("address1_country").unwrap().entry_count(), 243);
}

#[test]
fn japan_keeps_free_text() {
    let c = controller();
    let mut form = address_form("Japan", "Osaka");
    c.initialize(&mut form);

    assert!(!form.has_selector("address1_stateorprovince"));
    assert!(form.is_visible("address1_stateorprovince"));
    assert_eq!(form.value("address1_stateorprovince").as_deref(), Some("Osaka"));
}

#[test]
fn full_user_journey() {
    let c = controller();
    let mut form = address_form("United States", "Texas");
    c.initialize(&mut form);
    assert_eq!(form.selected_value("address1_stateorprovince").as_deref(), Some("Texas"));

    // US -> Japan: the selector goes away and its value with it.
    c.pick_country(&mut form, "Japan");
    assert!(!form.has_selector("address1_stateorprovince"));
    assert_eq!(form.value("address1_stateorprovince").as_deref(), Some(""));

    // Japan -> Canada -> pick a province.
    c.pick_country(&mut form, "Canada");
    assert!(form.has_selector("address1_stateorprovince"));
    assert!(!form.is_visible("address1_stateorprovince"));
    assert_eq!(c.pick_subdivision(&mut form, "Quebec").as_deref(), Some("Quebec"));

    assert_eq!(form.value("address1_country").as_deref(), Some("Canada"));
    assert_eq!(form.value("address1_stateorprovince").as_deref(), Some("Quebec"));
}

#[test]
fn reinitializing_does_not_duplicate_selectors() {
    let c = controller();
    let mut form = address_form("Canada", "Yukon");
    c.initialize(&mut form);
    c.initialize(&mut form);

    let events = form.events();
    assert_eq!(events.inserted, 2);
    assert_eq!(events.replaced, 2);
    assert_eq!(form.value("address1_stateorprovince").as_deref(), Some("Yukon"));
}

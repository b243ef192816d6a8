// crates/geoselect-wasm/src/dom.rs
use geoselect_core::form::selector_id;
use geoselect_core::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlOptionElement, HtmlSelectElement};

#[wasm_bindgen]
extern "C" {
    /// The host form object handed in from JavaScript.
    pub type FormContext;

    /// `null`/`undefined` when the form has no such field.
    #[wasm_bindgen(method, js_name = getAttribute)]
    fn get_attribute(this: &FormContext, name: &str) -> Option<FormAttribute>;

    pub type FormAttribute;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &FormAttribute) -> JsValue;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &FormAttribute, value: &str);

    #[wasm_bindgen(method, js_name = getRequiredLevel)]
    fn get_required_level(this: &FormAttribute) -> JsValue;
}

type ChangeListener = Closure<dyn FnMut(Event)>;

type FieldPair = (String, String);

thread_local! {
    // One live wiring per (country, subdivision) field pair.
    static WIRINGS: RefCell<HashMap<FieldPair, Rc<Wiring>>> = RefCell::new(HashMap::new());
}

/// One wired field pair: the controller plus the page it drives.
struct Wiring {
    controller: CascadeController<'static, DefaultBackend>,
    host: RefCell<DomHost>,
}

impl Wiring {
    fn dispatch(&self, field: &str) {
        // A change raised while a transition is running is dropped.
        let Ok(mut host) = self.host.try_borrow_mut() else {
            return;
        };
        self.controller.handle_change(&mut *host, field);
    }
}

pub(crate) fn wire(
    controller: CascadeController<'static, DefaultBackend>,
    document: Document,
    form: FormContext,
) -> bool {
    let wiring = Rc::new_cyclic(|weak: &Weak<Wiring>| Wiring {
        controller,
        host: RefCell::new(DomHost {
            document,
            form,
            wiring: weak.clone(),
            listeners: HashMap::new(),
        }),
    });

    let wired = {
        let mut host = wiring.host.borrow_mut();
        wiring.controller.initialize(&mut *host)
    };
    if wired {
        let pair = (
            wiring.controller.country_field().to_string(),
            wiring.controller.subdivision_field().to_string(),
        );
        // The previous wiring's selectors were replaced above; its
        // listeners go with it.
        let previous = WIRINGS.with(|w| w.borrow_mut().insert(pair, wiring));
        drop(previous);
    }
    wired
}

/// Field binding backed by the JS form object, selector surface backed by
/// the DOM.
struct DomHost {
    document: Document,
    form: FormContext,
    wiring: Weak<Wiring>,
    listeners: HashMap<String, ChangeListener>,
}

impl DomHost {
    fn input(&self, field: &str) -> Option<Element> {
        self.document.get_element_by_id(field)
    }

    fn select(&self, field: &str) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(&selector_id(field))
            .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    }

    fn render(&mut self, selector: &Selector) -> Option<HtmlSelectElement> {
        let select = self
            .document
            .create_element("select")
            .ok()?
            .dyn_into::<HtmlSelectElement>()
            .ok()?;
        select.set_id(selector.id());
        select
            .set_attribute("req", &selector.required_level().code().to_string())
            .ok()?;

        for option in selector.options() {
            let element =
                HtmlOptionElement::new_with_text_and_value(&option.label, &option.value).ok()?;
            select.append_child(&element).ok()?;
        }
        select.set_selected_index(selector.selected_index() as i32);

        self.listen(&select, selector.field());
        Some(select)
    }

    fn listen(&mut self, select: &HtmlSelectElement, field: &str) {
        let wiring = self.wiring.clone();
        let name = field.to_string();
        let listener = ChangeListener::new(move |_event: Event| {
            if let Some(wiring) = wiring.upgrade() {
                wiring.dispatch(&name);
            }
        });
        if select
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.insert(field.to_string(), listener);
        }
    }
}

impl FieldBinding for DomHost {
    fn value(&self, field: &str) -> Option<String> {
        let attribute = self.form.get_attribute(field)?;
        Some(attribute.get_value().as_string().unwrap_or_default())
    }

    fn set_value(&mut self, field: &str, value: &str) {
        if let Some(attribute) = self.form.get_attribute(field) {
            attribute.set_value(value);
        }
    }

    fn required_level(&self, field: &str) -> RequiredLevel {
        self.form
            .get_attribute(field)
            .and_then(|a| a.get_required_level().as_string())
            .map(|s| RequiredLevel::parse(&s))
            .unwrap_or_default()
    }
}

impl SelectorSurface for DomHost {
    fn has_field(&self, field: &str) -> bool {
        self.input(field).is_some()
    }

    fn set_field_visible(&mut self, field: &str, visible: bool) {
        let Some(input) = self.input(field).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        let style = input.style();
        let _ = if visible {
            style.remove_property("display").map(drop)
        } else {
            style.set_property("display", "none")
        };
    }

    fn has_selector(&self, field: &str) -> bool {
        self.select(field).is_some()
    }

    fn insert_selector(&mut self, selector: Selector) {
        let Some(input) = self.input(selector.field()) else {
            return;
        };
        let container = self
            .document
            .get_element_by_id(&format!("{}_d", selector.field()))
            .or_else(|| input.parent_element());
        let Some(container) = container else {
            return;
        };
        if let Some(select) = self.render(&selector) {
            let _ = container.append_child(&select);
        }
    }

    fn replace_selector(&mut self, selector: Selector) {
        let Some(old) = self.select(selector.field()) else {
            return;
        };
        if let Some(select) = self.render(&selector) {
            let _ = old.replace_with_with_node_1(&select);
        }
    }

    fn remove_selector(&mut self, field: &str) {
        if let Some(old) = self.select(field) {
            AsRef::<Element>::as_ref(&old).remove();
        }
        self.listeners.remove(field);
    }

    fn selected_value(&self, field: &str) -> Option<String> {
        self.select(field).map(|s| s.value())
    }

    fn choose_option(&mut self, field: &str, value: &str) -> bool {
        let Some(select) = self.select(field) else {
            return false;
        };
        for idx in 0..select.length() {
            let matches = select
                .item(idx)
                .and_then(|e| e.dyn_into::<HtmlOptionElement>().ok())
                .is_some_and(|o| o.value() == value);
            if matches {
                select.set_selected_index(idx as i32);
                return true;
            }
        }
        false
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stub_form() -> FormContext {
        js_sys::Function::new_no_args(
            r#"
            const values = { country: "Canada", state: "" };
            return {
                getAttribute(name) {
                    if (!(name in values)) return null;
                    return {
                        getValue: () => values[name],
                        setValue: (v) => { values[name] = v; },
                        getRequiredLevel: () => "none",
                    };
                },
            };
            "#,
        )
        .call0(&JsValue::NULL)
        .unwrap()
        .unchecked_into()
    }

    fn page() -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        for id in ["country", "state"] {
            if document.get_element_by_id(id).is_none() {
                let input = document.create_element("input").unwrap();
                input.set_id(id);
                body.append_child(&input).unwrap();
            }
        }
        document
    }

    fn wired_pairs() -> usize {
        WIRINGS.with(|w| w.borrow().len())
    }

    #[wasm_bindgen_test]
    fn rewiring_a_pair_replaces_the_old_wiring() {
        let table = DefaultTable::shared().unwrap();
        let document = page();

        let controller = CascadeController::new(table, "country", "state");
        assert!(wire(controller.clone(), document.clone(), stub_form()));
        let pair = ("country".to_string(), "state".to_string());
        let first = WIRINGS.with(|w| Rc::downgrade(&w.borrow()[&pair]));

        assert!(wire(controller, document, stub_form()));
        assert_eq!(wired_pairs(), 1);
        assert!(first.upgrade().is_none());
    }
}

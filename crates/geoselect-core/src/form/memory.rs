// crates/geoselect-core/src/form/memory.rs
use super::{FieldBinding, RequiredLevel, Selector, SelectorSurface};
use serde::Serialize;
use std::collections::BTreeMap;

/// One field of a [`MemoryForm`]: raw value, metadata and optional selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryField {
    pub value: String,
    pub required: RequiredLevel,
    pub visible: bool,
    pub selector: Option<Selector>,
}

impl Default for MemoryField {
    fn default() -> Self {
        MemoryField {
            value: String::new(),
            required: RequiredLevel::None,
            visible: true,
            selector: None,
        }
    }
}

/// How many times selectors were inserted, replaced or removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectorEvents {
    pub inserted: usize,
    pub replaced: usize,
    pub removed: usize,
}

/// In-memory form implementing both [`FieldBinding`] and
/// [`SelectorSurface`].
///
/// ```
/// use geoselect_core::form::{FieldBinding, MemoryForm, RequiredLevel};
///
/// let form = MemoryForm::new()
///     .with_field("address1_country", "Canada")
///     .with_required("address1_country", RequiredLevel::Required);
///
/// assert_eq!(form.value("address1_country").as_deref(), Some("Canada"));
/// assert_eq!(form.value("fax"), None);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct MemoryForm {
    fields: BTreeMap<String, MemoryField>,
    events: SelectorEvents,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or overwrites the value of) a visible field.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.entry(name.to_string()).or_default().value = value.to_string();
        self
    }

    /// Sets the requirement level of an existing field.
    pub fn with_required(mut self, name: &str, level: RequiredLevel) -> Self {
        if let Some(field) = self.fields.get_mut(name) {
            field.required = level;
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&MemoryField> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &MemoryField)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn selector(&self, name: &str) -> Option<&Selector> {
        self.fields.get(name).and_then(|f| f.selector.as_ref())
    }

    /// `false` for hidden and for missing fields.
    pub fn is_visible(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.visible)
    }

    pub fn events(&self) -> SelectorEvents {
        self.events
    }
}

impl FieldBinding for MemoryForm {
    fn value(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|f| f.value.clone())
    }

    fn set_value(&mut self, field: &str, value: &str) {
        if let Some(f) = self.fields.get_mut(field) {
            f.value = value.to_string();
        }
    }

    fn required_level(&self, field: &str) -> RequiredLevel {
        self.fields
            .get(field)
            .map(|f| f.required)
            .unwrap_or_default()
    }
}

impl SelectorSurface for MemoryForm {
    fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn set_field_visible(&mut self, field: &str, visible: bool) {
        if let Some(f) = self.fields.get_mut(field) {
            f.visible = visible;
        }
    }

    fn has_selector(&self, field: &str) -> bool {
        self.selector(field).is_some()
    }

    fn insert_selector(&mut self, selector: Selector) {
        if let Some(f) = self.fields.get_mut(selector.field()) {
            f.selector = Some(selector);
            self.events.inserted += 1;
        }
    }

    fn replace_selector(&mut self, selector: Selector) {
        if let Some(f) = self.fields.get_mut(selector.field()) {
            if f.selector.is_some() {
                f.selector = Some(selector);
                self.events.replaced += 1;
            }
        }
    }

    fn remove_selector(&mut self, field: &str) {
        if let Some(f) = self.fields.get_mut(field) {
            if f.selector.take().is_some() {
                self.events.removed += 1;
            }
        }
    }

    fn selected_value(&self, field: &str) -> Option<String> {
        self.selector(field).map(|s| s.selected_value().to_string())
    }

    fn choose_option(&mut self, field: &str, value: &str) -> bool {
        self.fields
            .get_mut(field)
            .and_then(|f| f.selector.as_mut())
            .is_some_and(|s| s.select(value))
    }
}

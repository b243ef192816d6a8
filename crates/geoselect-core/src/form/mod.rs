// crates/geoselect-core/src/form/mod.rs

//! # Form host interfaces
//!
//! The cascade controller never touches a real form. It talks to the host
//! through two narrow traits:
//!
//! - [`FieldBinding`]: read/write a named field's raw value and read its
//!   requirement level (the host form framework).
//! - [`SelectorSurface`]: place, replace and remove a [`Selector`] next to a
//!   named field and hide/show the raw field (the host rendering surface).
//!
//! [`MemoryForm`] implements both in memory for tests, the CLI simulator and
//! the demos.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod memory;

pub use memory::{MemoryField, MemoryForm, SelectorEvents};

/// Prefix of every generated selector id (`ddl_<field>`).
pub const SELECTOR_ID_PREFIX: &str = "ddl_";

/// Element id of the selector generated for `field`.
pub fn selector_id(field: &str) -> String {
    format!("{SELECTOR_ID_PREFIX}{field}")
}

/// Tri-state validation hint carried by a host field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredLevel {
    #[default]
    None,
    Recommended,
    Required,
}

impl RequiredLevel {
    /// Lenient parse of the host's string: `"required"` and `"recommended"`
    /// (ASCII case-insensitive, trimmed) map to their level, anything else
    /// is [`RequiredLevel::None`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("required") {
            RequiredLevel::Required
        } else if s.eq_ignore_ascii_case("recommended") {
            RequiredLevel::Recommended
        } else {
            RequiredLevel::None
        }
    }

    /// Numeric code written to a selector's `req` attribute.
    pub fn code(self) -> u8 {
        match self {
            RequiredLevel::None => 0,
            RequiredLevel::Recommended => 1,
            RequiredLevel::Required => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequiredLevel::None => "none",
            RequiredLevel::Recommended => "recommended",
            RequiredLevel::Required => "required",
        }
    }
}

impl From<&str> for RequiredLevel {
    fn from(s: &str) -> Self {
        RequiredLevel::parse(s)
    }
}

impl fmt::Display for RequiredLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<option>` of a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A generated dropdown bound to one form field.
///
/// The first option is always the blank placeholder (empty value and
/// label). Every further option uses the entry name as both value and
/// label. At most one option is selected; the placeholder is selected when
/// nothing else is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selector {
    id: String,
    field: String,
    required: RequiredLevel,
    options: Vec<SelectOption>,
    selected: usize,
}

impl Selector {
    /// Builds the selector for `field`, pre-selecting the option whose name
    /// equals `current` exactly.
    pub fn build<'a, I>(field: &str, required: RequiredLevel, names: I, current: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut options = vec![SelectOption {
            value: String::new(),
            label: String::new(),
        }];
        let mut selected = 0;

        for name in names {
            if !current.is_empty() && name == current && selected == 0 {
                selected = options.len();
            }
            options.push(SelectOption {
                value: name.to_string(),
                label: name.to_string(),
            });
        }

        Selector {
            id: selector_id(field),
            field: field.to_string(),
            required,
            options,
            selected,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the form field this selector writes to.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn required_level(&self) -> RequiredLevel {
        self.required
    }

    /// All options, placeholder first.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Number of real entries (the placeholder is not counted).
    pub fn entry_count(&self) -> usize {
        self.options.len() - 1
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Value of the selected option; `""` for the placeholder.
    pub fn selected_value(&self) -> &str {
        &self.options[self.selected].value
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Selects the option whose value is `value` (`""` selects the
    /// placeholder). Returns `false` and leaves the selection alone when no
    /// option matches.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

/// The host form framework, seen per named field.
pub trait FieldBinding {
    /// Current raw value of `field`, or `None` when the form has no such
    /// field. An empty field is `Some("")`.
    fn value(&self, field: &str) -> Option<String>;

    /// Writes the raw value. Writing to a missing field does nothing.
    fn set_value(&mut self, field: &str, value: &str);

    /// Requirement level of `field`; [`RequiredLevel::None`] when unknown.
    fn required_level(&self, field: &str) -> RequiredLevel;
}

/// The host rendering surface: where selectors live next to raw fields.
pub trait SelectorSurface {
    /// Whether the raw input for `field` exists on the surface.
    fn has_field(&self, field: &str) -> bool;

    fn set_field_visible(&mut self, field: &str, visible: bool);

    fn has_selector(&self, field: &str) -> bool;

    /// Places a new selector next to its field (`selector.field()`).
    fn insert_selector(&mut self, selector: Selector);

    /// Swaps the existing selector of `selector.field()` for `selector` in
    /// place.
    fn replace_selector(&mut self, selector: Selector);

    /// Removes the selector of `field`, if any.
    fn remove_selector(&mut self, field: &str);

    /// Value currently selected in the selector of `field`; `None` when the
    /// field has no selector.
    fn selected_value(&self, field: &str) -> Option<String>;

    /// Programmatically picks `value` in the selector of `field`, as a user
    /// would. Returns `false` when there is no selector or no such option.
    fn choose_option(&mut self, field: &str, value: &str) -> bool;
}

/// Anything that is both a field binding and a selector surface.
pub trait FormHost: FieldBinding + SelectorSurface {}

impl<T: FieldBinding + SelectorSurface + ?Sized> FormHost for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_level_parse_is_lenient() {
        assert_eq!(RequiredLevel::parse("required"), RequiredLevel::Required);
        assert_eq!(RequiredLevel::parse(" Recommended "), RequiredLevel::Recommended);
        assert_eq!(RequiredLevel::parse("none"), RequiredLevel::None);
        assert_eq!(RequiredLevel::parse("mandatory"), RequiredLevel::None);
        assert_eq!(RequiredLevel::from(""), RequiredLevel::None);
    }

    #[test]
    fn required_level_codes() {
        assert_eq!(RequiredLevel::None.code(), 0);
        assert_eq!(RequiredLevel::Recommended.code(), 1);
        assert_eq!(RequiredLevel::Required.code(), 2);
        assert_eq!(RequiredLevel::Required.to_string(), "required");
    }

    #[test]
    fn selector_starts_with_placeholder() {
        let s = Selector::build("state", RequiredLevel::None, ["Ohio", "Utah"], "");
        assert_eq!(s.id(), "ddl_state");
        assert_eq!(s.options()[0].value, "");
        assert_eq!(s.entry_count(), 2);
        assert_eq!(s.selected_index(), 0);
        assert_eq!(s.selected_value(), "");
    }

    #[test]
    fn selector_preselects_exact_match_only() {
        let s = Selector::build("state", RequiredLevel::Required, ["Ohio", "Utah"], "Utah");
        assert_eq!(s.selected_value(), "Utah");
        assert_eq!(s.required_level().code(), 2);

        let s = Selector::build("state", RequiredLevel::None, ["Ohio", "Utah"], "utah");
        assert_eq!(s.selected_value(), "");
    }

    #[test]
    fn select_rejects_unknown_values() {
        let mut s = Selector::build("state", RequiredLevel::None, ["Ohio", "Utah"], "Ohio");
        assert!(!s.select("Texas"));
        assert_eq!(s.selected_value(), "Ohio");
        assert!(s.select(""));
        assert_eq!(s.selected_value(), "");
    }
}

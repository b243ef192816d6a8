// crates/geoselect-core/src/text.rs

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Québec` -> `Quebec`)
/// 2\) Normalize to lowercase
///
/// Only the substring search helpers use this. Cascade lookups compare
/// country names exactly.
///
/// # Examples
///
/// ```rust
/// use geoselect_core::text::fold_key;
///
/// assert_eq!(fold_key("Québec"), "quebec");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

// crates/geoselect-core/src/traits.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for the strings held by a [`RegionTable`].
///
/// This abstraction allows the crate to swap how names and abbreviations are
/// stored (for example [`CompactBackend`] keeps them as `Box<str>`) without
/// changing the accessors, which always hand out `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and the string type
/// must round-trip through serde so tables can be snapshotted with bincode.
///
/// [`RegionTable`]: crate::RegionTable
/// [`CompactBackend`]: crate::common::CompactBackend
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + PartialEq
        + Eq
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`]: exact, case-sensitive equality (the cascade rule)
/// - [`NameMatch::name_contains`]: substring match on the folded form
///
/// # Examples
/// ```rust
/// use geoselect_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Quebec").is_named("Quebec"));
/// assert!(!Place("Quebec").is_named("quebec"));
/// assert!(Place("Québec").name_contains("QUEB"));
/// assert!(Place("Newfoundland and Labrador").name_contains("labra"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str() == q
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

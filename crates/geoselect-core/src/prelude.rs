//! geoselect prelude: common types and traits for demos and callers.

pub use crate::cascade::CascadeController;
pub use crate::common::{CompactBackend, DefaultBackend, StandardBackend, TableStats};
pub use crate::error::{GeoSelectError, Result};
pub use crate::form::{
    FieldBinding, FormHost, MemoryForm, RequiredLevel, Selector, SelectorSurface,
};
pub use crate::model::{Country, DefaultTable, RegionTable, Subdivision};
pub use crate::search::RegionSearch;
pub use crate::traits::{GeoBackend, NameMatch};

// crates/geoselect-core/src/lib.rs

//! Country/subdivision reference table and the cascading selector logic
//! built on top of it.
//!
//! ```
//! use geoselect_core::prelude::*;
//!
//! let table = DefaultTable::shared().unwrap();
//! assert_eq!(table.find_subdivisions("Canada").len(), 13);
//! ```

pub mod cascade;
pub mod common;
pub mod error;
pub mod form;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
// Raw JSON shapes, shared by the loaders
#[doc(hidden)]
pub mod raw;

pub use crate::cascade::CascadeController;
pub use crate::common::{CompactBackend, DefaultBackend, StandardBackend, TableStats};
pub use crate::error::{GeoSelectError, Result};
pub use crate::form::{
    FieldBinding, FormHost, MemoryForm, RequiredLevel, SelectOption, Selector, SelectorSurface,
};
pub use crate::loader::builder::CompressionMode;
pub use crate::model::{Country, DefaultTable, RegionTable, Subdivision};
// The search trait must be in scope for lookups
pub use crate::search::RegionSearch;
pub use crate::text::fold_key;
pub use crate::traits::{GeoBackend, NameMatch};

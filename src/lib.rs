//! geoselect-rs: umbrella crate used by the demos.
//!
//! Everything lives in [`geoselect_core`]; this crate only re-exports it so
//! the demos can `use geoselect_rs::prelude::*`.

pub use geoselect_core::*;

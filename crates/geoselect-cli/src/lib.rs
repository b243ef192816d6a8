//! geoselect-cli
//! =============
//!
//! Command-line interface for the `geoselect-core` reference table.
//!
//! This crate primarily provides a binary (`geoselect`). The library target
//! only carries this overview for the rendered docs.
//!
//! ```text
//! geoselect --help
//! geoselect stats
//! geoselect subdivisions Canada
//! geoselect simulate --initial-country "United States" --country Japan
//! ```
//!
//! For programmatic access use the [`geoselect-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

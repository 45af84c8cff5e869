//! Doorware: Door-Hardware Catalog Importer
//!
//! Converts a vendor-supplied nested tree of product photos into a flat,
//! taxonomy-tagged JSON product catalog, copying one representative image
//! per model folder into a destination directory.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod importer;
pub mod inspect;
pub mod logging;
pub mod taxonomy;
pub mod tooling;
pub mod types;
